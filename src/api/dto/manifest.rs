//! DTO for the AI plugin manifest served at `/.well-known/ai-plugin.json`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PluginManifest {
    pub schema_version: &'static str,
    pub name_for_human: &'static str,
    pub name_for_model: &'static str,
    pub description_for_human: &'static str,
    pub description_for_model: &'static str,
    pub auth: PluginAuth,
    pub api: PluginApi,
    pub logo_url: String,
    pub contact_email: String,
    pub legal_info_url: String,
}

#[derive(Debug, Serialize)]
pub struct PluginAuth {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PluginApi {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: String,
}

impl PluginManifest {
    /// Builds the manifest with absolute URLs under `base_url`.
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');

        Self {
            schema_version: "v1",
            name_for_human: "CRM Briefing",
            name_for_model: "crm_briefing",
            description_for_human: "Brief yourself on a CRM contact and their company.",
            description_for_model: "Use this tool to retrieve a contact's CRM record, their \
                company, associated deals and recent engagements by email address and company \
                domain, or a short sales summary of the contact.",
            auth: PluginAuth { kind: "none" },
            api: PluginApi {
                kind: "openapi",
                url: format!("{base_url}/openapi.yaml"),
            },
            logo_url: format!("{base_url}/logo.png"),
            contact_email: "support@example.com".to_string(),
            legal_info_url: format!("{base_url}/legal"),
        }
    }
}
