//! Application messages

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Review queue ============
    /// A row committed rightward past the snap distance
    Accepted(u64),
    /// A row committed leftward past the snap distance
    Declined(u64),
    /// Restore the built-in demo entries
    ResetQueue,
    /// Queue entries loaded from the user's config directory
    QueueLoaded(Result<Vec<(String, String)>, String>),

    // ============ Window ============
    /// Window resized
    WindowResized(iced::Size),
    /// Close button pressed
    CloseRequested,
    /// Settings written to disk on shutdown
    SettingsSaved(Result<(), String>),
}
