// Workspace uses
use mgv_config::AddressesConfig;
use mgv_types::{ContractName, ResolvedRecord, VersionEntry, VersionedHistory};
// Local uses
use crate::{
    error::TemplateError,
    renderer::{TemplateRenderer, Vars},
};

/// Builds the addresses page from the current addresses section and one
/// section per previous deployment.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    current: TemplateRenderer,
    previous: TemplateRenderer,
    version_var: String,
}

impl DocumentAssembler {
    /// `version_var` is the extra placeholder of the previous-addresses
    /// template that receives the version id.
    pub fn new(contracts: &[ContractName], version_var: &str) -> Result<Self, TemplateError> {
        let mut previous_keys: Vec<&str> = contracts.iter().map(ContractName::as_str).collect();
        previous_keys.push(version_var);

        Ok(Self {
            current: TemplateRenderer::new(contracts)?,
            previous: TemplateRenderer::new(&previous_keys)?,
            version_var: version_var.to_string(),
        })
    }

    pub fn from_config(config: &AddressesConfig) -> Result<Self, TemplateError> {
        Self::new(&config.contracts, &config.version_var)
    }

    /// Renders the current addresses section.
    pub fn render_current(
        &self,
        addresses: &ResolvedRecord,
        template: &str,
    ) -> Result<String, TemplateError> {
        self.current.render(&record_vars(addresses), template)
    }

    /// Renders the previous-addresses template once per history entry, oldest first.
    pub fn render_history(
        &self,
        history: &VersionedHistory,
        template: &str,
    ) -> Result<Vec<String>, TemplateError> {
        history
            .iter()
            .map(|entry| self.render_entry(entry, template))
            .collect()
    }

    fn render_entry(&self, entry: &VersionEntry, template: &str) -> Result<String, TemplateError> {
        let mut vars = record_vars(&entry.addresses);
        vars.insert(self.version_var.clone(), entry.version.to_string());

        self.previous.render(&vars, template)
    }

    /// Concatenates the current section and the historical sections, without separators.
    pub fn assemble<S: AsRef<str>>(current: &str, history: &[S]) -> String {
        let mut document = current.to_string();
        for section in history {
            document.push_str(section.as_ref());
        }
        document
    }

    /// Renders both templates and assembles the whole page.
    pub fn render_document(
        &self,
        current: &ResolvedRecord,
        history: &VersionedHistory,
        current_template: &str,
        previous_template: &str,
    ) -> Result<String, TemplateError> {
        vlog::debug!("Constructing section for core contract addresses...");
        let current_section = self.render_current(current, current_template)?;

        vlog::debug!("Constructing section for previous deployment addresses...");
        let previous_sections = self.render_history(history, previous_template)?;

        Ok(Self::assemble(&current_section, &previous_sections))
    }
}

fn record_vars(record: &ResolvedRecord) -> Vars {
    record
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
