//! The interactive controller: curve state, change detection and redraws.
//!
//! The controller is either idle or has a pending redraw. An action moves
//! it to [`ControllerState::Redrawing`] only if the wrapped parameters
//! differ from the ones last drawn; [`Controller::redraw`] paints the
//! surface and returns it to idle.

use crate::color::ColorSource;
use crate::config::ControlsConfig;
use crate::curve::CurveParameters;
use crate::geometry::{Cell, GridSize};
use crate::input::Action;
use crate::render::Rasterizer;
use crate::surface::Surface;

/// Whether the surface is up to date with the current parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Nothing changed since the last redraw.
    Idle,
    /// Parameters changed; the surface must be redrawn.
    Redrawing,
}

/// Result of feeding one action to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Update {
    /// The user asked to quit.
    Quit,
    /// Parameters are the same as last drawn.
    Unchanged,
    /// Parameters changed and a redraw is pending.
    Changed,
}

/// Owns the curve parameters and drives the rasterizer on change.
#[derive(Debug, Clone)]
pub struct Controller<C> {
    params: CurveParameters,
    drawn: Option<CurveParameters>,
    controls: ControlsConfig,
    rasterizer: Rasterizer<C>,
    redraws: u64,
}

impl<C: ColorSource> Controller<C> {
    /// Start from `initial` (phase wrapped). Nothing has been drawn yet, so
    /// the first [`update`](Self::update) always reports a change.
    #[must_use]
    pub fn new(initial: CurveParameters, rasterizer: Rasterizer<C>) -> Self {
        Self {
            params: initial.normalized(),
            drawn: None,
            controls: ControlsConfig::default(),
            rasterizer,
            redraws: 0,
        }
    }

    /// Use custom key step sizes.
    #[must_use]
    pub fn with_controls(mut self, controls: ControlsConfig) -> Self {
        self.controls = controls;
        self
    }

    /// Current parameters.
    #[must_use]
    pub const fn parameters(&self) -> CurveParameters {
        self.params
    }

    /// Parameters used by the last redraw, if any.
    #[must_use]
    pub const fn drawn(&self) -> Option<CurveParameters> {
        self.drawn
    }

    /// Grid the curve is drawn onto.
    #[must_use]
    pub const fn grid(&self) -> GridSize {
        self.rasterizer.grid()
    }

    /// Number of redraws performed.
    #[must_use]
    pub const fn redraw_count(&self) -> u64 {
        self.redraws
    }

    /// Idle or redrawing, by comparing current and drawn parameters.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        if self.drawn == Some(self.params) {
            ControllerState::Idle
        } else {
            ControllerState::Redrawing
        }
    }

    /// Apply the delta for `action` and wrap the phase. Returns false for
    /// [`Action::Quit`], which leaves the parameters alone.
    pub fn apply(&mut self, action: Action) -> bool {
        let ControlsConfig { frequency_step, phase_step } = self.controls;
        match action {
            Action::IncreaseA => self.params.a += frequency_step,
            Action::DecreaseA => self.params.a -= frequency_step,
            Action::IncreaseB => self.params.b += frequency_step,
            Action::DecreaseB => self.params.b -= frequency_step,
            Action::IncreasePhase => self.params.delta += phase_step,
            Action::DecreasePhase => self.params.delta -= phase_step,
            Action::Quit => return false,
            Action::None => {}
        }
        self.params = self.params.normalized();
        true
    }

    /// Apply `action` and report whether a redraw is due.
    pub fn update(&mut self, action: Action) -> Update {
        if !self.apply(action) {
            crate::info!("controller", "quit after {} redraws", self.redraws);
            return Update::Quit;
        }
        match self.state() {
            ControllerState::Idle => Update::Unchanged,
            ControllerState::Redrawing => Update::Changed,
        }
    }

    /// Clear `surface`, write the status line at row 0, rasterize the curve
    /// and remember the parameters as drawn. The caller flushes.
    pub fn redraw<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let params = self.params;
        crate::debug!("controller", "redraw #{}: {}", self.redraws + 1, params);

        surface.clear();
        surface.print(Cell::ORIGIN, &params.to_string());
        self.rasterizer.rasterize(surface, &params);

        self.drawn = Some(params);
        self.redraws += 1;
    }

    /// [`update`](Self::update) followed by [`redraw`](Self::redraw) when needed.
    pub fn step<S: Surface + ?Sized>(&mut self, action: Action, surface: &mut S) -> Update {
        let update = self.update(action);
        if update == Update::Changed {
            self.redraw(surface);
        }
        update
    }
}
