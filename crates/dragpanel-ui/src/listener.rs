/// Observer notified when the panel is sent to a rest position.
///
/// Notifications fire as soon as the transition is requested, before the
/// settle animation has finished. Panics raised here are not caught.
pub trait DraggableListener {
    fn on_maximized(&mut self);

    fn on_minimized(&mut self);

    fn on_closed_to_left(&mut self);

    fn on_closed_to_right(&mut self);
}

impl<L: DraggableListener + ?Sized> DraggableListener for Box<L> {
    fn on_maximized(&mut self) {
        (**self).on_maximized();
    }

    fn on_minimized(&mut self) {
        (**self).on_minimized();
    }

    fn on_closed_to_left(&mut self) {
        (**self).on_closed_to_left();
    }

    fn on_closed_to_right(&mut self) {
        (**self).on_closed_to_right();
    }
}
