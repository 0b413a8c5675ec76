pub mod device_entry;
pub mod icons;
