//! Outbound interface from the widget to its embedding application.

use super::render::PresentationTree;

/// Screen coordinates near the control that triggered the widget.
///
/// The widget only forwards this; placement is the host's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Anchor {
    pub x: u16,
    pub y: u16,
    /// Height of the triggering control, for hosts that flip the surface above it
    pub reference_height: u16,
}

/// Operations the widget needs from the surface that displays it.
///
/// Handed to the widget at construction; the widget never reaches for
/// global state.
pub trait Host {
    /// Mount `tree`, replacing whatever was mounted before.
    fn request_render(&mut self, tree: PresentationTree);

    /// Apply the user's choice (insert it, copy it, ...).
    fn notify_item_chosen(&mut self, value: &str);

    /// Where the surface should appear.
    fn request_anchor(&mut self) -> Anchor;

    /// The widget became visible.
    fn present(&mut self, _anchor: Anchor) {}

    /// The widget became hidden.
    fn dismiss(&mut self) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Host that records every call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingHost {
        pub renders: Vec<PresentationTree>,
        pub chosen: Vec<String>,
        pub presented: Vec<Anchor>,
        pub dismissed: usize,
        pub anchor: Anchor,
    }

    impl RecordingHost {
        pub fn last_render(&self) -> &PresentationTree {
            self.renders.last().expect("nothing rendered")
        }

        pub fn last_grid_values(&self) -> Vec<&str> {
            self.last_render().grid.iter().map(|c| c.value.as_str()).collect()
        }
    }

    impl Host for RecordingHost {
        fn request_render(&mut self, tree: PresentationTree) {
            self.renders.push(tree);
        }

        fn notify_item_chosen(&mut self, value: &str) {
            self.chosen.push(value.to_string());
        }

        fn request_anchor(&mut self) -> Anchor {
            self.anchor
        }

        fn present(&mut self, anchor: Anchor) {
            self.presented.push(anchor);
        }

        fn dismiss(&mut self) {
            self.dismissed += 1;
        }
    }
}
