/// Rendering surface the carousel drives.
///
/// Slide `i` and indicator `i` share one active flag; the controller never
/// touches the view in any other way.
pub trait SlideView {
    fn slide_count(&self) -> usize;
    fn set_active(&mut self, index: usize, active: bool);
}

impl<V: SlideView + ?Sized> SlideView for &mut V {
    fn slide_count(&self) -> usize {
        (**self).slide_count()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        (**self).set_active(index, active)
    }
}

/// Headless view that just remembers the flags, handy for tests and for
/// hosts that render from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct FlagView {
    flags: Vec<bool>,
    writes: usize,
}

impl FlagView {
    pub fn new(slide_count: usize) -> Self {
        Self { flags: vec![false; slide_count], writes: 0 }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.flags.iter().enumerate().filter(|(_, a)| **a).map(|(i, _)| i).collect()
    }

    /// Number of `set_active` calls received so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SlideView for FlagView {
    fn slide_count(&self) -> usize {
        self.flags.len()
    }

    fn set_active(&mut self, index: usize, active: bool) {
        self.writes += 1;
        if let Some(flag) = self.flags.get_mut(index) {
            *flag = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_view_tracks_active_slides() {
        let mut view = FlagView::new(3);
        view.set_active(1, true);
        assert_eq!(view.active_indices(), vec![1]);
        view.set_active(1, false);
        view.set_active(2, true);
        assert_eq!(view.active_indices(), vec![2]);
        assert_eq!(view.writes(), 3);
    }

    #[test]
    fn out_of_range_write_is_ignored() {
        let mut view = FlagView::new(2);
        view.set_active(5, true);
        assert!(view.active_indices().is_empty());
        assert!(!view.is_active(5));
    }
}
