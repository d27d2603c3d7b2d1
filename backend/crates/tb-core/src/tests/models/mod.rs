mod enums;
mod project;
mod sprint;
mod task;
