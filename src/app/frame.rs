// SPDX-License-Identifier: MPL-2.0
//! The five mock-up frames of the savings-setup flow.

/// Frames the viewer can navigate between. Every frame is reachable from
/// every other frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frame {
    #[default]
    Home,
    Onboarding,
    Percentage,
    Confirmation,
    Success,
}

impl Frame {
    /// All frames in display order.
    pub const ALL: [Frame; 5] = [
        Frame::Home,
        Frame::Onboarding,
        Frame::Percentage,
        Frame::Confirmation,
        Frame::Success,
    ];

    /// 1-based position of the frame.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Frame::Home => 1,
            Frame::Onboarding => 2,
            Frame::Percentage => 3,
            Frame::Confirmation => 4,
            Frame::Success => 5,
        }
    }

    /// Frame at the given 1-based position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Frame> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Short label used on the wide navigation buttons.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Frame::Home => "frame-home-title",
            Frame::Onboarding => "frame-onboarding-title",
            Frame::Percentage => "frame-percentage-title",
            Frame::Confirmation => "frame-confirmation-title",
            Frame::Success => "frame-success-title",
        }
    }

    /// Caption shown above the phone.
    #[must_use]
    pub fn heading_key(self) -> &'static str {
        match self {
            Frame::Home => "frame-home-heading",
            Frame::Onboarding => "frame-onboarding-heading",
            Frame::Percentage => "frame-percentage-heading",
            Frame::Confirmation => "frame-confirmation-heading",
            Frame::Success => "frame-success-heading",
        }
    }

    /// Behavioral insight shown in the banner and as the frame's research note.
    #[must_use]
    pub fn insight_key(self) -> &'static str {
        match self {
            Frame::Home => "insight-home",
            Frame::Onboarding => "insight-onboarding",
            Frame::Percentage => "insight-percentage",
            Frame::Confirmation => "insight-confirmation",
            Frame::Success => "insight-success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_display_order() {
        for (position, frame) in Frame::ALL.iter().enumerate() {
            assert_eq!(frame.index(), position + 1);
            assert_eq!(Frame::from_index(position + 1), Some(*frame));
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        assert_eq!(Frame::from_index(0), None);
        assert_eq!(Frame::from_index(6), None);
    }

    #[test]
    fn default_frame_is_home() {
        assert_eq!(Frame::default(), Frame::Home);
        assert_eq!(Frame::default().index(), 1);
    }
}
