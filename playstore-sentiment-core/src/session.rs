use {
    tracing::debug,
    crate::error::PipelineError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Analysis,
    PopularApps,
}

/// State kept for the lifetime of one interactive session.
///
/// Navigating to the popular apps view clears the app id entered for
/// analysis, so a later return to the analysis view starts from an empty
/// input again.
#[derive(Debug, Clone)]
pub struct Session {
    view: View,
    selected_app: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            view: View::Analysis,
            selected_app: None,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn selected_app(&self) -> Option<&str> {
        self.selected_app.as_deref()
    }

    pub fn navigate(&mut self, view: View) {
        if view == View::PopularApps && self.selected_app.take().is_some() {
            debug!("cleared selected app on entering popular apps view");
        }
        self.view = view;
    }

    /// Stores a user-entered app id. Blank input is rejected and leaves the
    /// current selection untouched.
    pub fn submit_app_id(&mut self, app_id: &str) -> Result<&str, PipelineError> {
        let app_id = app_id.trim();
        if app_id.is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        self.view = View::Analysis;
        Ok(self.selected_app.insert(app_id.to_owned()).as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_analysis_without_selection() {
        let session = Session::new();
        assert_eq!(session.view(), View::Analysis);
        assert_eq!(session.selected_app(), None);
    }

    #[test]
    fn submit_selects_trimmed_app_id() {
        let mut session = Session::new();
        assert_eq!(session.submit_app_id("  com.shopee.id "), Ok("com.shopee.id"));
        assert_eq!(session.selected_app(), Some("com.shopee.id"));
    }

    #[test]
    fn blank_submit_is_rejected() {
        let mut session = Session::new();
        session.submit_app_id("com.whatsapp").unwrap();

        assert_eq!(session.submit_app_id("   "), Err(PipelineError::EmptyInput));
        assert_eq!(session.selected_app(), Some("com.whatsapp"));
    }

    #[test]
    fn popular_apps_view_clears_selection() {
        let mut session = Session::new();
        session.submit_app_id("com.whatsapp").unwrap();

        session.navigate(View::Analysis);
        assert_eq!(session.selected_app(), Some("com.whatsapp"));

        session.navigate(View::PopularApps);
        assert_eq!(session.view(), View::PopularApps);
        assert_eq!(session.selected_app(), None);
    }
}
