//! Checklist template repository.

use upkeep_core::entities::ChecklistTemplate;

use crate::error::ServiceError;
use crate::service::UpkeepService;

impl UpkeepService {
    /// Store a template. A template id is frozen once any run references it,
    /// including after the template itself was removed.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Core` for repeated or blank item ids and
    /// `ServiceError::TemplateInUse` when runs already reference the id.
    pub fn upsert_template(&mut self, template: ChecklistTemplate) -> Result<(), ServiceError> {
        template.validate()?;
        if self.runs.values().any(|r| r.template_id == template.id) {
            return Err(ServiceError::TemplateInUse {
                template_id: template.id,
            });
        }
        tracing::debug!(
            template_id = %template.id,
            items = template.item_count(),
            "template: stored"
        );
        self.templates.insert(template.id.clone(), template);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn get_template(&self, id: &str) -> Result<&ChecklistTemplate, ServiceError> {
        self.templates
            .get(id)
            .ok_or_else(|| ServiceError::not_found("template", id))
    }

    pub fn templates(&self) -> impl Iterator<Item = &ChecklistTemplate> {
        self.templates.values()
    }

    /// Delete a template. Runs that reference it are left in place and score
    /// through the unresolved-template path from then on.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` (not found) for an unknown id.
    pub fn remove_template(&mut self, id: &str) -> Result<ChecklistTemplate, ServiceError> {
        let template = self
            .templates
            .remove(id)
            .ok_or_else(|| ServiceError::not_found("template", id))?;
        let orphaned = self.runs.values().filter(|r| r.template_id == id).count();
        if orphaned > 0 {
            tracing::warn!(template_id = %id, orphaned, "template: removed while runs still reference it");
        }
        Ok(template)
    }
}
