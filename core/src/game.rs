/// Page-lifetime progress for one team. Never persisted; reset on reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub current_score: i64,
    pub used_hints: u32,
    pub completed_images: Vec<String>,
    pub current_image: Option<String>,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_image(&mut self, image_key: impl Into<String>) {
        self.current_image = Some(image_key.into());
    }

    pub fn record_hint(&mut self) {
        self.used_hints = self.used_hints.saturating_add(1);
    }

    pub fn add_points(&mut self, points: i64) {
        self.current_score = self.current_score.saturating_add(points);
    }

    /// The backend total wins over any locally accumulated score.
    pub fn apply_server_score(&mut self, score: i64) {
        self.current_score = score;
    }

    pub fn complete_current_image(&mut self) -> Option<String> {
        let image_key = self.current_image.take()?;
        if !self.is_completed(&image_key) {
            self.completed_images.push(image_key.clone());
        }
        Some(image_key)
    }

    pub fn is_completed(&self, image_key: &str) -> bool {
        self.completed_images.iter().any(|done| done == image_key)
    }
}
