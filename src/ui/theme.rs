use eframe::egui::Color32;

/// Fixed palette for the chat surface: pale cyan backdrop, cream
/// bubbles, blue user text, green bot text.
pub struct Theme {
    pub backdrop: Color32,
    pub bubble_fill: Color32,
    pub user_text: Color32,
    pub bot_text: Color32,
    pub timestamp: Color32,
    pub error: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            backdrop: Color32::from_rgb(224, 247, 250),
            bubble_fill: Color32::from_rgb(255, 253, 208),
            user_text: Color32::from_rgb(90, 155, 213),
            bot_text: Color32::from_rgb(46, 139, 87),
            timestamp: Color32::from_rgb(85, 85, 85),
            error: Color32::from_rgb(178, 34, 34),
        }
    }
}
