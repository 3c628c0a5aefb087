//! Summary printed when a user is created.

use std::io::Write;

use common::AppResult;
use domain::UserCreated;

use crate::console::write_line;
use crate::notifier::CreationSubscriber;
use crate::render::Renderer;

/// Renders the created user to the console.
pub struct PresentationSink<'r, W: Write> {
    out: W,
    renderer: &'r dyn Renderer,
}

impl<'r, W: Write> PresentationSink<'r, W> {
    pub fn new(out: W, renderer: &'r dyn Renderer) -> Self {
        Self { out, renderer }
    }
}

impl<W: Write> CreationSubscriber for PresentationSink<'_, W> {
    fn on_user_created(&mut self, event: &UserCreated<'_>) -> AppResult<()> {
        let summary = self.renderer.summary(event.user());
        write_line(&mut self.out, &summary)
    }
}
