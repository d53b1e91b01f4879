pub mod afc;
pub mod age;
pub mod amh;
pub mod duration;
pub mod fsh;
pub mod iui_history;
pub mod ovulation;
pub mod semen;
pub mod tubal;
