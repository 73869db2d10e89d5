#[derive(Default)]
pub struct UiState {
    pub show_about: bool,
    pub last_error: Option<String>,
}
