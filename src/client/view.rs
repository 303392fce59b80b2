//! View switcher and view model.
//!
//! [`DashboardView`] is the capability set the flows depend on: the visible
//! panel, the three form fields and the three display slots (login error,
//! status, response). [`ViewState`] is the plain in-memory implementation used
//! by the terminal front end and the tests.

/// Top-level panel. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Login,
    Dashboard,
}

/// The single visual-state marker of a [`Panel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Neutral,
    Success,
    Error,
}

/// A display slot: text content plus presentation flags.
///
/// Rendering replaces both content and tone, so state markers never accumulate
/// across repeated renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Panel {
    content: String,
    tone: Tone,
    visible: bool,
    loading: bool,
}

impl Panel {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Replaces the content and the tone.
    pub fn render(&mut self, content: impl Into<String>, tone: Tone) {
        self.content = content.into();
        self.tone = tone;
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }
}

/// Named slots the dashboard flows read from and render into.
pub trait DashboardView {
    /// Makes `view` the only visible panel.
    fn show_view(&mut self, view: View);

    fn visible_view(&self) -> View;

    fn email(&self) -> &str;

    fn password(&self) -> &str;

    fn prompt(&self) -> &str;

    /// Empties the email and password fields.
    fn reset_login_form(&mut self);

    fn clear_prompt(&mut self);

    fn login_error(&self) -> &Panel;

    fn login_error_mut(&mut self) -> &mut Panel;

    fn status(&self) -> &Panel;

    fn status_mut(&mut self) -> &mut Panel;

    fn response(&self) -> &Panel;

    fn response_mut(&mut self) -> &mut Panel;

    fn show_login(&mut self) {
        self.show_view(View::Login);
    }

    fn show_dashboard(&mut self) {
        self.show_view(View::Dashboard);
    }
}

/// In-memory view model.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    view: View,
    email: String,
    password: String,
    prompt: String,
    login_error: Panel,
    status: Panel,
    response: Panel,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }
}

impl DashboardView for ViewState {
    fn show_view(&mut self, view: View) {
        self.view = view;
    }

    fn visible_view(&self) -> View {
        self.view
    }

    fn email(&self) -> &str {
        &self.email
    }

    fn password(&self) -> &str {
        &self.password
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }

    fn reset_login_form(&mut self) {
        self.email.clear();
        self.password.clear();
    }

    fn clear_prompt(&mut self) {
        self.prompt.clear();
    }

    fn login_error(&self) -> &Panel {
        &self.login_error
    }

    fn login_error_mut(&mut self) -> &mut Panel {
        &mut self.login_error
    }

    fn status(&self) -> &Panel {
        &self.status
    }

    fn status_mut(&mut self) -> &mut Panel {
        &mut self.status
    }

    fn response(&self) -> &Panel {
        &self.response
    }

    fn response_mut(&mut self) -> &mut Panel {
        &mut self.response
    }
}
