pub mod diagnosis;
pub mod form;
pub mod observation;
pub mod recommendation;
pub mod selection;
