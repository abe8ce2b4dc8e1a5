// Service layer: day-state store, date engine, clock ticker, settings

pub mod countdown;
pub mod settings;
