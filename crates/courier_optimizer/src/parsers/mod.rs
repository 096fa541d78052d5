pub mod city_map;
pub mod parser;
