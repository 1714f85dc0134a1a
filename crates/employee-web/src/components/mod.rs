//! Reusable UI components for the web interface

pub mod charts;
pub mod employee_card;
pub mod employee_list;
pub mod header;
pub mod icons;
pub mod loading;
pub mod navigation;
pub mod stat_card;
pub mod toast;
