use crate::models::{UpdateCheckResult, UpdateInfo};

/// Frames to wait after staging so the entry transition starts from the hidden style.
pub const ENTRY_FRAMES: u8 = 2;

/// Identifies one staging of an update; deferred work carries it so a restage cancels it.
pub type Epoch = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerState {
    Idle,
    Staged { info: UpdateInfo, frames_left: u8 },
    Visible(UpdateInfo),
    Dismissing(UpdateInfo),
}

/// What the component renders for a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerView {
    Hidden,
    Entering(String),
    Shown(String),
    Leaving(String),
}

impl BannerView {
    pub fn version(&self) -> Option<&str> {
        match self {
            BannerView::Hidden => None,
            BannerView::Entering(v) | BannerView::Shown(v) | BannerView::Leaving(v) => Some(v),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, BannerView::Shown(_))
    }
}

#[derive(Debug)]
pub struct BannerMachine {
    state: BannerState,
    epoch: Epoch,
}

impl Default for BannerMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerMachine {
    pub fn new() -> Self {
        Self { state: BannerState::Idle, epoch: 0 }
    }

    #[cfg(test)]
    pub fn state(&self) -> &BannerState {
        &self.state
    }

    /// Handles a channel event. Returns the new epoch when the update was staged and
    /// entry frames must be scheduled.
    pub fn notify(&mut self, result: &UpdateCheckResult, dismissed: Option<&str>) -> Option<Epoch> {
        let version = result.qualifying_version()?;
        if dismissed == Some(version) {
            return None;
        }
        let info = UpdateInfo { version: version.to_string() };
        match &self.state {
            BannerState::Visible(_) => {
                self.state = BannerState::Visible(info);
                None
            }
            BannerState::Idle | BannerState::Staged { .. } | BannerState::Dismissing(_) => {
                self.epoch += 1;
                self.state = BannerState::Staged { info, frames_left: ENTRY_FRAMES };
                Some(self.epoch)
            }
        }
    }

    /// One animation frame has passed. Returns true when another frame is still needed.
    pub fn frame_elapsed(&mut self, epoch: Epoch) -> bool {
        if epoch != self.epoch {
            return false;
        }
        let BannerState::Staged { info, frames_left } = &self.state else {
            return false;
        };
        if *frames_left > 1 {
            self.state = BannerState::Staged { info: info.clone(), frames_left: frames_left - 1 };
            true
        } else {
            self.state = BannerState::Visible(info.clone());
            false
        }
    }

    /// Starts the exit. Returns the version to record as dismissed, plus the epoch the
    /// settle timer must carry.
    pub fn close(&mut self) -> Option<(String, Epoch)> {
        let info = match &self.state {
            BannerState::Staged { info, .. } | BannerState::Visible(info) => info.clone(),
            BannerState::Idle | BannerState::Dismissing(_) => return None,
        };
        self.epoch += 1;
        let version = info.version.clone();
        self.state = BannerState::Dismissing(info);
        Some((version, self.epoch))
    }

    /// The exit delay elapsed.
    pub fn settle(&mut self, epoch: Epoch) {
        if epoch == self.epoch && matches!(self.state, BannerState::Dismissing(_)) {
            self.state = BannerState::Idle;
        }
    }

    pub fn view(&self) -> BannerView {
        match &self.state {
            BannerState::Idle => BannerView::Hidden,
            BannerState::Staged { info, .. } => BannerView::Entering(info.version.clone()),
            BannerState::Visible(info) => BannerView::Shown(info.version.clone()),
            BannerState::Dismissing(info) => BannerView::Leaving(info.version.clone()),
        }
    }
}
