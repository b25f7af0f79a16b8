// Generated by gdbind-codegen from extension_api.json. Do not edit.

pub mod canvas_item;
pub mod node_2d;
pub mod tile_map;

pub use canvas_item::CanvasItem;
pub use node_2d::Node2D;
pub use tile_map::TileMap;
