//! Popover placement and the booking-detail panel state machine.
//!
//! When a booking pill is clicked the detail panel is either anchored next
//! to the pill (wide viewports) or shown as a full-width bottom sheet
//! (narrow viewports). Placement is recomputed from scratch on every click
//! and is never adjusted while the panel stays open.

/// Viewports narrower than this use the bottom sheet.
pub const COMPACT_BREAKPOINT: f64 = 640.0;

/// Minimum distance kept between the popover and the viewport edges.
pub const VIEWPORT_MARGIN: f64 = 20.0;

/// Screen-space rectangle of the clicked element, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Distance from the viewport top to the element's top edge
    pub top: f64,
    /// Distance from the viewport left to the element's left edge
    pub left: f64,
    /// Element width
    pub width: f64,
    /// Element height
    pub height: f64,
}

impl Rect {
    /// Y coordinate of the bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Current viewport size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in logical pixels
    pub width: f64,
    /// Height in logical pixels
    pub height: f64,
}

impl Viewport {
    /// Whether this viewport is below the compact breakpoint.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.width < COMPACT_BREAKPOINT
    }
}

/// Fixed dimensions of the popover card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopoverSize {
    /// Card width
    pub width: f64,
    /// Card height
    pub height: f64,
    /// Space between the trigger and the card
    pub gap: f64,
}

impl Default for PopoverSize {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 260.0,
            gap: 12.0,
        }
    }
}

/// Which side of the trigger the popover sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Under the trigger (default)
    Below,
    /// Over the trigger, used when there is no room below
    Above,
}

/// Where to render the detail panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Narrow viewport: render a bottom sheet, no coordinates.
    Compact,
    /// Absolutely positioned popover.
    Positioned {
        /// Top edge of the card
        top: f64,
        /// Left edge of the card
        left: f64,
        /// Side of the trigger the card is on
        orientation: Orientation,
    },
}

/// Computes where the popover for `trigger` goes.
///
/// The card is pulled left to stay inside the right margin, then pushed
/// right to respect the left margin. When it would overflow the bottom
/// margin it flips above the trigger. The flipped position is not clamped,
/// so on very short viewports it can still run past the top edge.
#[must_use]
pub fn place_popover(trigger: &Rect, viewport: Viewport, size: PopoverSize) -> Placement {
    if viewport.is_compact() {
        return Placement::Compact;
    }

    let mut top = trigger.bottom() + size.gap;
    let mut left = trigger.left;
    let mut orientation = Orientation::Below;

    if left + size.width > viewport.width - VIEWPORT_MARGIN {
        left = viewport.width - size.width - VIEWPORT_MARGIN;
    }
    if left < VIEWPORT_MARGIN {
        left = VIEWPORT_MARGIN;
    }

    if top + size.height > viewport.height - VIEWPORT_MARGIN {
        orientation = Orientation::Above;
        top = trigger.top - size.height - size.gap;
    }

    Placement::Positioned {
        top,
        left,
        orientation,
    }
}

/// Visibility of the booking-detail panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PanelState {
    /// Nothing shown
    #[default]
    Closed,
    /// Popover anchored to the clicked pill
    OpenPositioned {
        /// Booking being shown
        booking_id: String,
        /// Coordinates computed at click time
        top: f64,
        /// Coordinates computed at click time
        left: f64,
        /// Side of the pill the card is on
        orientation: Orientation,
    },
    /// Full-width bottom sheet
    OpenCompact {
        /// Booking being shown
        booking_id: String,
    },
}

/// Input events the panel reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEvent {
    /// A booking pill or dot was clicked
    TriggerClicked {
        /// Booking behind the trigger
        booking_id: String,
        /// Trigger rectangle at click time
        trigger: Rect,
        /// Viewport at click time
        viewport: Viewport,
    },
    /// Click on the backdrop outside the card
    BackdropClicked,
    /// Any scroll
    Scrolled,
    /// The card's close button
    CloseClicked,
    /// Viewport size changed
    Resized(Viewport),
}

impl PanelState {
    /// Booking currently shown, if any.
    #[must_use]
    pub fn booking_id(&self) -> Option<&str> {
        match self {
            Self::Closed => None,
            Self::OpenPositioned { booking_id, .. } | Self::OpenCompact { booking_id } => {
                Some(booking_id)
            }
        }
    }

    /// Whether the panel is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// Opens the panel for `booking_id`, placing it from scratch.
    #[must_use]
    pub fn open(booking_id: String, trigger: &Rect, viewport: Viewport, size: PopoverSize) -> Self {
        match place_popover(trigger, viewport, size) {
            Placement::Compact => Self::OpenCompact { booking_id },
            Placement::Positioned {
                top,
                left,
                orientation,
            } => Self::OpenPositioned {
                booking_id,
                top,
                left,
                orientation,
            },
        }
    }

    /// Next state after `event`.
    #[must_use]
    pub fn apply(self, event: PanelEvent, size: PopoverSize) -> Self {
        match event {
            PanelEvent::TriggerClicked {
                booking_id,
                trigger,
                viewport,
            } => Self::open(booking_id, &trigger, viewport, size),
            PanelEvent::BackdropClicked | PanelEvent::Scrolled | PanelEvent::CloseClicked => {
                Self::Closed
            }
            PanelEvent::Resized(viewport) => match self {
                Self::OpenPositioned { .. } if viewport.is_compact() => Self::Closed,
                Self::OpenCompact { .. } if !viewport.is_compact() => Self::Closed,
                unchanged => unchanged,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;

    const DESKTOP: Viewport = Viewport {
        width: 1024.0,
        height: 768.0,
    };

    fn pill(top: f64, left: f64) -> Rect {
        Rect {
            top,
            left,
            width: 120.0,
            height: 20.0,
        }
    }

    #[test]
    fn test_narrow_viewport_is_compact_regardless_of_trigger() {
        let phone = Viewport {
            width: 639.0,
            height: 800.0,
        };
        for trigger in [pill(0.0, 0.0), pill(700.0, 600.0), pill(-50.0, 5000.0)] {
            assert_eq!(
                place_popover(&trigger, phone, PopoverSize::default()),
                Placement::Compact
            );
        }
    }

    #[test]
    fn test_breakpoint_width_is_not_compact() {
        let tablet = Viewport {
            width: 640.0,
            height: 800.0,
        };
        assert!(matches!(
            place_popover(&pill(100.0, 100.0), tablet, PopoverSize::default()),
            Placement::Positioned { .. }
        ));
    }

    #[test]
    fn test_default_placement_is_below_trigger() {
        let trigger = pill(100.0, 200.0);

        let placement = place_popover(&trigger, DESKTOP, PopoverSize::default());

        assert_eq!(
            placement,
            Placement::Positioned {
                top: 132.0,
                left: 200.0,
                orientation: Orientation::Below,
            }
        );
    }

    #[test]
    fn test_flips_above_near_bottom_edge() {
        let trigger = pill(700.0, 100.0);

        let Placement::Positioned {
            top, orientation, ..
        } = place_popover(&trigger, DESKTOP, PopoverSize::default())
        else {
            panic!("expected positioned placement");
        };

        assert_eq!(orientation, Orientation::Above);
        assert!(top < trigger.top);
        assert_eq!(top, 700.0 - 260.0 - 12.0);
    }

    #[test]
    fn test_clamps_near_right_edge() {
        let trigger = pill(100.0, DESKTOP.width - 50.0);

        let Placement::Positioned { left, .. } =
            place_popover(&trigger, DESKTOP, PopoverSize::default())
        else {
            panic!("expected positioned placement");
        };

        assert_eq!(left, DESKTOP.width - 300.0 - 20.0);
        assert!(left >= 0.0);
        assert!(left + 300.0 <= DESKTOP.width);
    }

    #[test]
    fn test_clamps_to_left_margin_when_viewport_barely_fits() {
        let narrow = Viewport {
            width: 650.0,
            height: 768.0,
        };
        let wide_card = PopoverSize {
            width: 640.0,
            ..PopoverSize::default()
        };

        let Placement::Positioned { left, .. } =
            place_popover(&pill(100.0, 300.0), narrow, wide_card)
        else {
            panic!("expected positioned placement");
        };

        assert_eq!(left, VIEWPORT_MARGIN);
    }

    #[test]
    fn test_flip_is_not_clamped_on_short_viewport() {
        let short = Viewport {
            width: 1024.0,
            height: 300.0,
        };

        let Placement::Positioned {
            top, orientation, ..
        } = place_popover(&pill(100.0, 100.0), short, PopoverSize::default())
        else {
            panic!("expected positioned placement");
        };

        assert_eq!(orientation, Orientation::Above);
        assert!(top < 0.0);
    }

    #[test]
    fn test_panel_opens_by_viewport_width() {
        let size = PopoverSize::default();
        let phone = Viewport {
            width: 390.0,
            height: 844.0,
        };

        let compact = PanelState::default().apply(
            PanelEvent::TriggerClicked {
                booking_id: "b3".to_string(),
                trigger: pill(300.0, 40.0),
                viewport: phone,
            },
            size,
        );
        assert_eq!(
            compact,
            PanelState::OpenCompact {
                booking_id: "b3".to_string()
            }
        );

        let positioned = PanelState::default().apply(
            PanelEvent::TriggerClicked {
                booking_id: "b3".to_string(),
                trigger: pill(300.0, 40.0),
                viewport: DESKTOP,
            },
            size,
        );
        assert!(matches!(positioned, PanelState::OpenPositioned { .. }));
        assert_eq!(positioned.booking_id(), Some("b3"));
    }

    #[test]
    fn test_panel_closes_on_dismiss_events() {
        let size = PopoverSize::default();
        for event in [
            PanelEvent::BackdropClicked,
            PanelEvent::Scrolled,
            PanelEvent::CloseClicked,
        ] {
            let open = PanelState::open("b1".to_string(), &pill(10.0, 10.0), DESKTOP, size);
            assert!(open.is_open());
            assert_eq!(open.apply(event, size), PanelState::Closed);
        }
    }

    #[test]
    fn test_panel_closes_when_resize_crosses_breakpoint() {
        let size = PopoverSize::default();
        let phone = Viewport {
            width: 500.0,
            height: 800.0,
        };

        let positioned = PanelState::open("b1".to_string(), &pill(10.0, 10.0), DESKTOP, size);
        assert_eq!(
            positioned.apply(PanelEvent::Resized(phone), size),
            PanelState::Closed
        );

        let compact = PanelState::open("b1".to_string(), &pill(10.0, 10.0), phone, size);
        assert_eq!(
            compact.apply(PanelEvent::Resized(DESKTOP), size),
            PanelState::Closed
        );
    }

    #[test]
    fn test_resize_within_mode_keeps_position() {
        let size = PopoverSize::default();
        let positioned = PanelState::open("b1".to_string(), &pill(10.0, 10.0), DESKTOP, size);
        let larger = Viewport {
            width: 1440.0,
            height: 900.0,
        };

        assert_eq!(
            positioned.clone().apply(PanelEvent::Resized(larger), size),
            positioned
        );
    }

    #[test]
    fn test_clicking_another_trigger_replaces_panel() {
        let size = PopoverSize::default();
        let first = PanelState::open("b1".to_string(), &pill(10.0, 10.0), DESKTOP, size);

        let second = first.apply(
            PanelEvent::TriggerClicked {
                booking_id: "b7".to_string(),
                trigger: pill(700.0, 900.0),
                viewport: DESKTOP,
            },
            size,
        );

        assert_eq!(
            second,
            PanelState::OpenPositioned {
                booking_id: "b7".to_string(),
                top: 700.0 - 260.0 - 12.0,
                left: 1024.0 - 300.0 - 20.0,
                orientation: Orientation::Above,
            }
        );
    }
}
