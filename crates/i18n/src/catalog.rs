use std::collections::HashMap;
use std::sync::OnceLock;

use crate::Language;

/// English catalog. Complete: every key the UI uses has an entry here.
pub(crate) const CATALOG_EN: &[(&str, &str)] = &[
    ("frigateViewerTitle", "Frigate Viewer"),
    ("tooltipConnected", "Connected"),
    ("tooltipDisconnected", "Disconnected"),
    ("statusConnected", "Frigate is reachable"),
    ("statusDisconnected", "Frigate is offline"),
    (
        "noCamerasConfigured",
        "No cameras configured. Open settings and list cameras.",
    ),
    ("noCameraSelected", "No camera selected"),
    ("loadingStream", "Loading stream..."),
    ("streamError", "Stream unavailable. Check your connection."),
    (
        "frigateOffline",
        "Frigate is offline. Check server status and settings.",
    ),
    (
        "previewHint",
        "Preview mode (1 fps). Click the image for live mode.",
    ),
    (
        "liveHint",
        "Live mode active. Click the image to return to preview.",
    ),
    ("previewModeChip", "Preview 1 FPS"),
    ("liveModeChip", "Live MJPEG"),
    ("testConnection", "Test Connection"),
    ("settings", "Settings"),
    ("save", "Save"),
    ("saved", "Saved!"),
    ("listCameras", "List Cameras"),
    ("frigateConnection", "Frigate Connection"),
    ("frigateServerUrl", "Frigate Server URL"),
    ("usernameOptional", "Username (optional)"),
    ("passwordOptional", "Password (optional)"),
    ("leaveBlankIfNoAuth", "Leave blank if no auth"),
    ("cameraSelection", "Camera Selection"),
    (
        "selectCamerasHint",
        "Select which cameras appear in the viewer panel:",
    ),
    ("camerasSelected", "{count} camera(s) selected"),
    ("noUrlConfigured", "No Frigate URL configured"),
    ("testing", "Testing..."),
    ("connectedVersion", "Connected! Frigate v{version}"),
    ("fetchCamerasFailed", "Failed to fetch cameras: {error}"),
    (
        "authFailed",
        "Authentication failed (401). Check credentials. Frigate native JWT auth may require reverse proxy Basic Auth.",
    ),
    (
        "cannotReachServer",
        "Cannot reach server. Check URL and whether Frigate is running.",
    ),
    ("httpError", "HTTP {status}: {statusText}"),
    (
        "credentialsWarning",
        "Credentials are stored locally. Prefer a dedicated Frigate user with limited permissions.",
    ),
    ("about", "About"),
    ("developedBy", "Developed by pir0c0pter0"),
    ("version", "Version {version}"),
    (
        "applyCloseHint",
        "Tip: use Apply/OK to persist configuration in Plasma dialogs.",
    ),
    ("enableHaDetection", "Enable Home Assistant Detection"),
    ("haEnable", "Enable"),
    ("haWsUrl", "HA WebSocket URL"),
    ("haToken", "HA Access Token"),
    ("haTokenPlaceholder", "Paste your Long-Lived Access Token"),
];

/// Portuguese catalog. Keys missing here fall back to English.
pub(crate) const CATALOG_PT: &[(&str, &str)] = &[
    ("frigateViewerTitle", "Visualizador Frigate"),
    ("tooltipConnected", "Conectado"),
    ("tooltipDisconnected", "Desconectado"),
    ("statusConnected", "Frigate acessivel"),
    ("statusDisconnected", "Frigate offline"),
    (
        "noCamerasConfigured",
        "Nenhuma camera configurada. Abra as configuracoes e liste as cameras.",
    ),
    ("noCameraSelected", "Nenhuma camera selecionada"),
    ("loadingStream", "Carregando stream..."),
    ("streamError", "Stream indisponivel. Verifique sua conexao."),
    (
        "frigateOffline",
        "Frigate esta offline. Verifique servidor e configuracoes.",
    ),
    (
        "previewHint",
        "Modo preview (1 fps). Clique na imagem para modo ao vivo.",
    ),
    (
        "liveHint",
        "Modo ao vivo ativo. Clique na imagem para voltar ao preview.",
    ),
    ("previewModeChip", "Preview 1 FPS"),
    ("liveModeChip", "Ao vivo MJPEG"),
    ("testConnection", "Testar Conexao"),
    ("settings", "Configuracoes"),
    ("save", "Salvar"),
    ("saved", "Salvo!"),
    ("listCameras", "Listar Cameras"),
    ("frigateConnection", "Conexao Frigate"),
    ("frigateServerUrl", "URL do Servidor Frigate"),
    ("usernameOptional", "Usuario (opcional)"),
    ("passwordOptional", "Senha (opcional)"),
    ("leaveBlankIfNoAuth", "Deixe em branco se nao usar autenticacao"),
    ("cameraSelection", "Selecao de Cameras"),
    (
        "selectCamerasHint",
        "Selecione quais cameras aparecem no painel:",
    ),
    ("camerasSelected", "{count} camera(s) selecionada(s)"),
    ("noUrlConfigured", "URL do Frigate nao configurada"),
    ("testing", "Testando..."),
    ("connectedVersion", "Conectado! Frigate v{version}"),
    ("fetchCamerasFailed", "Falha ao buscar cameras: {error}"),
    (
        "authFailed",
        "Autenticacao falhou (401). Verifique credenciais. Auth JWT nativo do Frigate pode exigir proxy com Basic Auth.",
    ),
    (
        "cannotReachServer",
        "Nao foi possivel conectar ao servidor. Verifique a URL e se o Frigate esta rodando.",
    ),
    ("httpError", "HTTP {status}: {statusText}"),
    (
        "credentialsWarning",
        "Credenciais sao armazenadas localmente. Prefira um usuario dedicado do Frigate com permissoes limitadas.",
    ),
    ("about", "Sobre"),
    ("developedBy", "Desenvolvido por pir0c0pter0"),
    ("version", "Versao {version}"),
    (
        "applyCloseHint",
        "Dica: use Aplicar/OK para persistir configuracoes no Plasma.",
    ),
    ("enableHaDetection", "Ativar Deteccao do Home Assistant"),
    ("haEnable", "Ativar"),
    ("haWsUrl", "URL WebSocket do HA"),
    ("haToken", "Token de Acesso do HA"),
    ("haTokenPlaceholder", "Cole seu Token de Acesso de Longa Duracao"),
];

fn build(entries: &'static [(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    entries.iter().copied().collect()
}

/// Lookup map for a language, materialized once on first use.
pub(crate) fn catalog(language: Language) -> &'static HashMap<&'static str, &'static str> {
    static EN: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    static PT: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();

    match language {
        Language::En => EN.get_or_init(|| build(CATALOG_EN)),
        Language::Pt => PT.get_or_init(|| build(CATALOG_PT)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::collections::HashSet;

    fn keys<'a>(entries: &'a [(&'a str, &'a str)]) -> HashSet<&'a str> {
        entries.iter().map(|(key, _)| *key).collect()
    }

    fn placeholders(template: &str) -> HashSet<String> {
        let pattern = Regex::new(r"\{([A-Za-z0-9_]+)\}").unwrap();
        pattern
            .captures_iter(template)
            .map(|caps| caps[1].to_string())
            .collect()
    }

    #[test]
    fn test_no_duplicate_keys() {
        assert_eq!(keys(CATALOG_EN).len(), CATALOG_EN.len());
        assert_eq!(keys(CATALOG_PT).len(), CATALOG_PT.len());
    }

    #[test]
    fn test_english_catalog_covers_portuguese() {
        let english = keys(CATALOG_EN);
        for (key, _) in CATALOG_PT {
            assert!(english.contains(key), "pt key {:?} missing from en", key);
        }
    }

    #[test]
    fn test_placeholders_agree_across_languages() {
        let english: HashMap<&str, &str> = CATALOG_EN.iter().copied().collect();
        for (key, template) in CATALOG_PT {
            if let Some(en_template) = english.get(key) {
                assert_eq!(
                    placeholders(template),
                    placeholders(en_template),
                    "placeholder mismatch for key {:?}",
                    key
                );
            }
        }
    }

    #[test]
    fn test_catalog_lookup_is_cached() {
        let first = catalog(Language::En);
        let second = catalog(Language::En);
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.len(), CATALOG_EN.len());
    }
}
