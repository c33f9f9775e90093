pub mod clip;
pub mod graphics_state;
pub mod interpreter;
pub mod op_kind;
pub mod operator;
