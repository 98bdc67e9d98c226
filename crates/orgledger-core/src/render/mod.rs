pub mod chart_render;

pub use chart_render::{render_chart, render_employee_line};
