pub mod sand_field;
