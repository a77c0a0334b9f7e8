use gpui::Entity;

pub mod presenter_entity;

/// Entities handed to every view of the window.
#[derive(Clone)]
pub struct DataEntities {
    pub presenter: Entity<presenter_entity::PresenterEntity>,
}
