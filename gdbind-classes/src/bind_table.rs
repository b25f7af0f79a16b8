// Generated by gdbind-codegen from extension_api.json. Do not edit.
// 168 method binds before feature selection.

use std::sync::OnceLock;

use gdbind_runtime::{fatal, BindResolver, BindResult, MethodBind};

/// Resolved binds for every compiled-in class, keyed by class then method.
pub struct BindTable {
    #[cfg(feature = "audio")]
    pub audio_effect: AudioEffectBinds,
    #[cfg(feature = "audio")]
    pub audio_effect_chorus: AudioEffectChorusBinds,
    #[cfg(feature = "csg")]
    pub csg_primitive_3d: CSGPrimitive3DBinds,
    #[cfg(feature = "csg")]
    pub csg_shape_3d: CSGShape3DBinds,
    #[cfg(feature = "csg")]
    pub csg_torus_3d: CSGTorus3DBinds,
    #[cfg(feature = "scene_2d")]
    pub canvas_item: CanvasItemBinds,
    #[cfg(feature = "gui")]
    pub code_edit: CodeEditBinds,
    #[cfg(feature = "gui")]
    pub control: ControlBinds,
    #[cfg(feature = "geometry")]
    pub geometry_2d: Geometry2DBinds,
    #[cfg(feature = "scene_3d")]
    pub geometry_instance_3d: GeometryInstance3DBinds,
    #[cfg(feature = "scene_3d")]
    pub mesh_instance_3d: MeshInstance3DBinds,
    #[cfg(feature = "navigation")]
    pub navigation_mesh: NavigationMeshBinds,
    pub node: NodeBinds,
    #[cfg(feature = "scene_2d")]
    pub node_2d: Node2DBinds,
    #[cfg(feature = "scene_3d")]
    pub node_3d: Node3DBinds,
    pub object: ObjectBinds,
    pub ref_counted: RefCountedBinds,
    pub resource: ResourceBinds,
    #[cfg(feature = "scene_3d")]
    pub soft_body_3d: SoftBody3DBinds,
    #[cfg(feature = "gui")]
    pub text_edit: TextEditBinds,
    #[cfg(feature = "scene_2d")]
    pub tile_map: TileMapBinds,
    #[cfg(feature = "scene_3d")]
    pub visual_instance_3d: VisualInstance3DBinds,
}

#[cfg(feature = "audio")]
pub struct AudioEffectBinds {}

#[cfg(feature = "audio")]
pub struct AudioEffectChorusBinds {
    pub set_voice_count: MethodBind,
    pub get_voice_count: MethodBind,
    pub set_dry: MethodBind,
    pub get_dry: MethodBind,
    pub set_wet: MethodBind,
    pub get_wet: MethodBind,
    pub set_voice_delay_ms: MethodBind,
    pub get_voice_delay_ms: MethodBind,
    pub set_voice_rate_hz: MethodBind,
    pub get_voice_rate_hz: MethodBind,
    pub set_voice_depth_ms: MethodBind,
    pub get_voice_depth_ms: MethodBind,
    pub set_voice_level_db: MethodBind,
    pub get_voice_level_db: MethodBind,
    pub set_voice_cutoff_hz: MethodBind,
    pub get_voice_cutoff_hz: MethodBind,
    pub set_voice_pan: MethodBind,
    pub get_voice_pan: MethodBind,
}

#[cfg(feature = "csg")]
pub struct CSGPrimitive3DBinds {
    pub set_flip_faces: MethodBind,
    pub get_flip_faces: MethodBind,
}

#[cfg(feature = "csg")]
pub struct CSGShape3DBinds {
    pub set_operation: MethodBind,
    pub get_operation: MethodBind,
    pub set_use_collision: MethodBind,
    pub is_using_collision: MethodBind,
    pub is_root_shape: MethodBind,
    pub get_meshes: MethodBind,
}

#[cfg(feature = "csg")]
pub struct CSGTorus3DBinds {
    pub set_inner_radius: MethodBind,
    pub get_inner_radius: MethodBind,
    pub set_outer_radius: MethodBind,
    pub get_outer_radius: MethodBind,
    pub set_sides: MethodBind,
    pub get_sides: MethodBind,
    pub set_ring_sides: MethodBind,
    pub get_ring_sides: MethodBind,
    pub set_smooth_faces: MethodBind,
    pub get_smooth_faces: MethodBind,
}

#[cfg(feature = "scene_2d")]
pub struct CanvasItemBinds {
    pub set_visible: MethodBind,
    pub is_visible: MethodBind,
    pub set_modulate: MethodBind,
    pub get_modulate: MethodBind,
    pub show: MethodBind,
    pub hide: MethodBind,
    pub queue_redraw: MethodBind,
}

#[cfg(feature = "gui")]
pub struct CodeEditBinds {
    pub set_code_completion_enabled: MethodBind,
    pub is_code_completion_enabled: MethodBind,
    pub set_auto_brace_completion_enabled: MethodBind,
    pub is_auto_brace_completion_enabled: MethodBind,
    pub set_code_completion_prefixes: MethodBind,
    pub get_code_completion_prefixes: MethodBind,
    pub request_code_completion: MethodBind,
    pub add_code_completion_option: MethodBind,
    pub update_code_completion_options: MethodBind,
    pub get_code_completion_options: MethodBind,
    pub confirm_code_completion: MethodBind,
    pub cancel_code_completion: MethodBind,
}

#[cfg(feature = "gui")]
pub struct ControlBinds {
    pub set_size: MethodBind,
    pub get_size: MethodBind,
    pub set_tooltip_text: MethodBind,
    pub get_tooltip_text: MethodBind,
    pub set_custom_minimum_size: MethodBind,
    pub get_custom_minimum_size: MethodBind,
    pub grab_focus: MethodBind,
    pub has_focus: MethodBind,
    pub get_combined_minimum_size: MethodBind,
}

#[cfg(feature = "geometry")]
pub struct Geometry2DBinds {
    pub is_polygon_clockwise: MethodBind,
    pub is_point_in_circle: MethodBind,
    pub is_point_in_polygon: MethodBind,
    pub triangulate_polygon: MethodBind,
    pub get_closest_point_to_segment: MethodBind,
}

#[cfg(feature = "scene_3d")]
pub struct GeometryInstance3DBinds {
    pub set_cast_shadows_setting: MethodBind,
    pub get_cast_shadows_setting: MethodBind,
    pub set_transparency: MethodBind,
    pub get_transparency: MethodBind,
}

#[cfg(feature = "scene_3d")]
pub struct MeshInstance3DBinds {
    pub set_skeleton_path: MethodBind,
    pub get_skeleton_path: MethodBind,
    pub get_surface_override_material_count: MethodBind,
}

#[cfg(feature = "navigation")]
pub struct NavigationMeshBinds {
    pub set_vertices: MethodBind,
    pub get_vertices: MethodBind,
    pub set_agent_radius: MethodBind,
    pub get_agent_radius: MethodBind,
    pub set_cell_size: MethodBind,
    pub get_cell_size: MethodBind,
    pub set_agent_height: MethodBind,
    pub get_agent_height: MethodBind,
    pub set_parsed_geometry_type: MethodBind,
    pub get_parsed_geometry_type: MethodBind,
    pub add_polygon: MethodBind,
    pub get_polygon_count: MethodBind,
    pub get_polygon: MethodBind,
    pub clear_polygons: MethodBind,
    pub clear: MethodBind,
}

pub struct NodeBinds {
    pub set_name: MethodBind,
    pub get_name: MethodBind,
    pub add_child: MethodBind,
    pub remove_child: MethodBind,
    pub get_child_count: MethodBind,
    pub get_child: MethodBind,
    pub get_parent: MethodBind,
    pub get_path: MethodBind,
    pub get_node_or_null: MethodBind,
    pub is_inside_tree: MethodBind,
    pub queue_free: MethodBind,
}

#[cfg(feature = "scene_2d")]
pub struct Node2DBinds {
    pub set_position: MethodBind,
    pub get_position: MethodBind,
    pub set_rotation: MethodBind,
    pub get_rotation: MethodBind,
    pub set_scale: MethodBind,
    pub get_scale: MethodBind,
}

#[cfg(feature = "scene_3d")]
pub struct Node3DBinds {
    pub set_position: MethodBind,
    pub get_position: MethodBind,
    pub set_rotation: MethodBind,
    pub get_rotation: MethodBind,
    pub set_scale: MethodBind,
    pub get_scale: MethodBind,
    pub set_visible: MethodBind,
    pub is_visible: MethodBind,
    pub translate: MethodBind,
    pub show: MethodBind,
    pub hide: MethodBind,
}

pub struct ObjectBinds {
    pub get_class: MethodBind,
    pub get_instance_id: MethodBind,
    pub set: MethodBind,
    pub get: MethodBind,
    pub has_method: MethodBind,
    pub has_signal: MethodBind,
    pub emit_signal: MethodBind,
    pub is_connected: MethodBind,
}

pub struct RefCountedBinds {
    pub get_reference_count: MethodBind,
}

pub struct ResourceBinds {
    pub set_name: MethodBind,
    pub get_name: MethodBind,
    pub set_path: MethodBind,
    pub get_path: MethodBind,
    pub set_local_to_scene: MethodBind,
    pub is_local_to_scene: MethodBind,
    pub duplicate: MethodBind,
    pub emit_changed: MethodBind,
}

#[cfg(feature = "scene_3d")]
pub struct SoftBody3DBinds {
    pub set_simulation_precision: MethodBind,
    pub get_simulation_precision: MethodBind,
    pub set_total_mass: MethodBind,
    pub get_total_mass: MethodBind,
    pub set_pressure_coefficient: MethodBind,
    pub get_pressure_coefficient: MethodBind,
    pub set_disable_mode: MethodBind,
    pub get_disable_mode: MethodBind,
}

#[cfg(feature = "gui")]
pub struct TextEditBinds {
    pub set_text: MethodBind,
    pub get_text: MethodBind,
    pub set_editable: MethodBind,
    pub is_editable: MethodBind,
    pub set_placeholder: MethodBind,
    pub get_placeholder: MethodBind,
    pub get_line_count: MethodBind,
    pub get_line: MethodBind,
    pub insert_text_at_caret: MethodBind,
    pub clear: MethodBind,
    pub backspace: MethodBind,
}

#[cfg(feature = "scene_2d")]
pub struct TileMapBinds {
    pub set_rendering_quadrant_size: MethodBind,
    pub get_rendering_quadrant_size: MethodBind,
    pub set_cell: MethodBind,
    pub erase_cell: MethodBind,
    pub get_cell_source_id: MethodBind,
    pub get_cell_atlas_coords: MethodBind,
    pub get_used_cells: MethodBind,
    pub clear_layer: MethodBind,
    pub clear: MethodBind,
    pub get_layers_count: MethodBind,
    pub add_layer: MethodBind,
}

#[cfg(feature = "scene_3d")]
pub struct VisualInstance3DBinds {
    pub set_layer_mask: MethodBind,
    pub get_layer_mask: MethodBind,
}

static TABLE: OnceLock<BindTable> = OnceLock::new();

/// Resolve every method bind of the enabled features. Runs once; later
/// calls return the table already loaded. Fails with the full list of
/// methods the engine does not know.
pub fn load_method_binds() -> BindResult<&'static BindTable> {
    if let Some(table) = TABLE.get() {
        return Ok(table);
    }
    let mut r = BindResolver::new();
    let table = BindTable {
        #[cfg(feature = "audio")]
        audio_effect: AudioEffectBinds {},
        #[cfg(feature = "audio")]
        audio_effect_chorus: AudioEffectChorusBinds {
            set_voice_count: r.resolve("AudioEffectChorus", "set_voice_count", 17583007),
            get_voice_count: r.resolve("AudioEffectChorus", "get_voice_count", 1326625203),
            set_dry: r.resolve("AudioEffectChorus", "set_dry", 657470351),
            get_dry: r.resolve("AudioEffectChorus", "get_dry", 883002194),
            set_wet: r.resolve("AudioEffectChorus", "set_wet", 1113773709),
            get_wet: r.resolve("AudioEffectChorus", "get_wet", 1374907984),
            set_voice_delay_ms: r.resolve("AudioEffectChorus", "set_voice_delay_ms", 400354002),
            get_voice_delay_ms: r.resolve("AudioEffectChorus", "get_voice_delay_ms", 852976076),
            set_voice_rate_hz: r.resolve("AudioEffectChorus", "set_voice_rate_hz", 1847629065),
            get_voice_rate_hz: r.resolve("AudioEffectChorus", "get_voice_rate_hz", 175713211),
            set_voice_depth_ms: r.resolve("AudioEffectChorus", "set_voice_depth_ms", 594346042),
            get_voice_depth_ms: r.resolve("AudioEffectChorus", "get_voice_depth_ms", 107383588),
            set_voice_level_db: r.resolve("AudioEffectChorus", "set_voice_level_db", 1329678924),
            get_voice_level_db: r.resolve("AudioEffectChorus", "get_voice_level_db", 1783284050),
            set_voice_cutoff_hz: r.resolve("AudioEffectChorus", "set_voice_cutoff_hz", 489929370),
            get_voice_cutoff_hz: r.resolve("AudioEffectChorus", "get_voice_cutoff_hz", 1729727602),
            set_voice_pan: r.resolve("AudioEffectChorus", "set_voice_pan", 1479426219),
            get_voice_pan: r.resolve("AudioEffectChorus", "get_voice_pan", 747670759),
        },
        #[cfg(feature = "csg")]
        csg_primitive_3d: CSGPrimitive3DBinds {
            set_flip_faces: r.resolve("CSGPrimitive3D", "set_flip_faces", 186505229),
            get_flip_faces: r.resolve("CSGPrimitive3D", "get_flip_faces", 1946381178),
        },
        #[cfg(feature = "csg")]
        csg_shape_3d: CSGShape3DBinds {
            set_operation: r.resolve("CSGShape3D", "set_operation", 1414228982),
            get_operation: r.resolve("CSGShape3D", "get_operation", 552970170),
            set_use_collision: r.resolve("CSGShape3D", "set_use_collision", 1701669857),
            is_using_collision: r.resolve("CSGShape3D", "is_using_collision", 1459048249),
            is_root_shape: r.resolve("CSGShape3D", "is_root_shape", 761031579),
            get_meshes: r.resolve("CSGShape3D", "get_meshes", 1325948713),
        },
        #[cfg(feature = "csg")]
        csg_torus_3d: CSGTorus3DBinds {
            set_inner_radius: r.resolve("CSGTorus3D", "set_inner_radius", 1850421590),
            get_inner_radius: r.resolve("CSGTorus3D", "get_inner_radius", 1549615951),
            set_outer_radius: r.resolve("CSGTorus3D", "set_outer_radius", 1009632792),
            get_outer_radius: r.resolve("CSGTorus3D", "get_outer_radius", 238793729),
            set_sides: r.resolve("CSGTorus3D", "set_sides", 2093717083),
            get_sides: r.resolve("CSGTorus3D", "get_sides", 233276710),
            set_ring_sides: r.resolve("CSGTorus3D", "set_ring_sides", 1271807283),
            get_ring_sides: r.resolve("CSGTorus3D", "get_ring_sides", 886083140),
            set_smooth_faces: r.resolve("CSGTorus3D", "set_smooth_faces", 962104444),
            get_smooth_faces: r.resolve("CSGTorus3D", "get_smooth_faces", 189726309),
        },
        #[cfg(feature = "scene_2d")]
        canvas_item: CanvasItemBinds {
            set_visible: r.resolve("CanvasItem", "set_visible", 313165298),
            is_visible: r.resolve("CanvasItem", "is_visible", 253167826),
            set_modulate: r.resolve("CanvasItem", "set_modulate", 2120733816),
            get_modulate: r.resolve("CanvasItem", "get_modulate", 1903756027),
            show: r.resolve("CanvasItem", "show", 1958034349),
            hide: r.resolve("CanvasItem", "hide", 1646406023),
            queue_redraw: r.resolve("CanvasItem", "queue_redraw", 841483966),
        },
        #[cfg(feature = "gui")]
        code_edit: CodeEditBinds {
            set_code_completion_enabled: r.resolve("CodeEdit", "set_code_completion_enabled", 1119397126),
            is_code_completion_enabled: r.resolve("CodeEdit", "is_code_completion_enabled", 762177246),
            set_auto_brace_completion_enabled: r.resolve("CodeEdit", "set_auto_brace_completion_enabled", 381589825),
            is_auto_brace_completion_enabled: r.resolve("CodeEdit", "is_auto_brace_completion_enabled", 629268524),
            set_code_completion_prefixes: r.resolve("CodeEdit", "set_code_completion_prefixes", 849350376),
            get_code_completion_prefixes: r.resolve("CodeEdit", "get_code_completion_prefixes", 791161676),
            request_code_completion: r.resolve("CodeEdit", "request_code_completion", 1730972772),
            add_code_completion_option: r.resolve("CodeEdit", "add_code_completion_option", 753854040),
            update_code_completion_options: r.resolve("CodeEdit", "update_code_completion_options", 501553510),
            get_code_completion_options: r.resolve("CodeEdit", "get_code_completion_options", 2101421077),
            confirm_code_completion: r.resolve("CodeEdit", "confirm_code_completion", 1541197687),
            cancel_code_completion: r.resolve("CodeEdit", "cancel_code_completion", 1489374668),
        },
        #[cfg(feature = "gui")]
        control: ControlBinds {
            set_size: r.resolve("Control", "set_size", 1293982280),
            get_size: r.resolve("Control", "get_size", 902931865),
            set_tooltip_text: r.resolve("Control", "set_tooltip_text", 532599530),
            get_tooltip_text: r.resolve("Control", "get_tooltip_text", 766025971),
            set_custom_minimum_size: r.resolve("Control", "set_custom_minimum_size", 2096553224),
            get_custom_minimum_size: r.resolve("Control", "get_custom_minimum_size", 2111371991),
            grab_focus: r.resolve("Control", "grab_focus", 2023240137),
            has_focus: r.resolve("Control", "has_focus", 1482819435),
            get_combined_minimum_size: r.resolve("Control", "get_combined_minimum_size", 1481822628),
        },
        #[cfg(feature = "geometry")]
        geometry_2d: Geometry2DBinds {
            is_polygon_clockwise: r.resolve("Geometry2D", "is_polygon_clockwise", 1823671509),
            is_point_in_circle: r.resolve("Geometry2D", "is_point_in_circle", 866907873),
            is_point_in_polygon: r.resolve("Geometry2D", "is_point_in_polygon", 957818615),
            triangulate_polygon: r.resolve("Geometry2D", "triangulate_polygon", 621178927),
            get_closest_point_to_segment: r.resolve("Geometry2D", "get_closest_point_to_segment", 1062773526),
        },
        #[cfg(feature = "scene_3d")]
        geometry_instance_3d: GeometryInstance3DBinds {
            set_cast_shadows_setting: r.resolve("GeometryInstance3D", "set_cast_shadows_setting", 175613317),
            get_cast_shadows_setting: r.resolve("GeometryInstance3D", "get_cast_shadows_setting", 471483623),
            set_transparency: r.resolve("GeometryInstance3D", "set_transparency", 92274059),
            get_transparency: r.resolve("GeometryInstance3D", "get_transparency", 929664914),
        },
        #[cfg(feature = "scene_3d")]
        mesh_instance_3d: MeshInstance3DBinds {
            set_skeleton_path: r.resolve("MeshInstance3D", "set_skeleton_path", 76769792),
            get_skeleton_path: r.resolve("MeshInstance3D", "get_skeleton_path", 1623905458),
            get_surface_override_material_count: r.resolve("MeshInstance3D", "get_surface_override_material_count", 1628018989),
        },
        #[cfg(feature = "navigation")]
        navigation_mesh: NavigationMeshBinds {
            set_vertices: r.resolve("NavigationMesh", "set_vertices", 790133996),
            get_vertices: r.resolve("NavigationMesh", "get_vertices", 537307759),
            set_agent_radius: r.resolve("NavigationMesh", "set_agent_radius", 1899289271),
            get_agent_radius: r.resolve("NavigationMesh", "get_agent_radius", 1126344878),
            set_cell_size: r.resolve("NavigationMesh", "set_cell_size", 1591407802),
            get_cell_size: r.resolve("NavigationMesh", "get_cell_size", 711211254),
            set_agent_height: r.resolve("NavigationMesh", "set_agent_height", 1057313250),
            get_agent_height: r.resolve("NavigationMesh", "get_agent_height", 219358203),
            set_parsed_geometry_type: r.resolve("NavigationMesh", "set_parsed_geometry_type", 2127513106),
            get_parsed_geometry_type: r.resolve("NavigationMesh", "get_parsed_geometry_type", 1755490160),
            add_polygon: r.resolve("NavigationMesh", "add_polygon", 335156160),
            get_polygon_count: r.resolve("NavigationMesh", "get_polygon_count", 63703332),
            get_polygon: r.resolve("NavigationMesh", "get_polygon", 944632012),
            clear_polygons: r.resolve("NavigationMesh", "clear_polygons", 83199170),
            clear: r.resolve("NavigationMesh", "clear", 776169095),
        },
        node: NodeBinds {
            set_name: r.resolve("Node", "set_name", 569317561),
            get_name: r.resolve("Node", "get_name", 1495148392),
            add_child: r.resolve("Node", "add_child", 1347469557),
            remove_child: r.resolve("Node", "remove_child", 256574980),
            get_child_count: r.resolve("Node", "get_child_count", 266894019),
            get_child: r.resolve("Node", "get_child", 138290479),
            get_parent: r.resolve("Node", "get_parent", 1413957643),
            get_path: r.resolve("Node", "get_path", 208261729),
            get_node_or_null: r.resolve("Node", "get_node_or_null", 1991382943),
            is_inside_tree: r.resolve("Node", "is_inside_tree", 907283255),
            queue_free: r.resolve("Node", "queue_free", 196588921),
        },
        #[cfg(feature = "scene_2d")]
        node_2d: Node2DBinds {
            set_position: r.resolve("Node2D", "set_position", 662743537),
            get_position: r.resolve("Node2D", "get_position", 681475954),
            set_rotation: r.resolve("Node2D", "set_rotation", 1221645813),
            get_rotation: r.resolve("Node2D", "get_rotation", 1204683638),
            set_scale: r.resolve("Node2D", "set_scale", 603298012),
            get_scale: r.resolve("Node2D", "get_scale", 1389988769),
        },
        #[cfg(feature = "scene_3d")]
        node_3d: Node3DBinds {
            set_position: r.resolve("Node3D", "set_position", 511406617),
            get_position: r.resolve("Node3D", "get_position", 291873946),
            set_rotation: r.resolve("Node3D", "set_rotation", 1898647069),
            get_rotation: r.resolve("Node3D", "get_rotation", 2117458078),
            set_scale: r.resolve("Node3D", "set_scale", 944821427),
            get_scale: r.resolve("Node3D", "get_scale", 1232914382),
            set_visible: r.resolve("Node3D", "set_visible", 537779953),
            is_visible: r.resolve("Node3D", "is_visible", 1881204990),
            translate: r.resolve("Node3D", "translate", 183987750),
            show: r.resolve("Node3D", "show", 908640834),
            hide: r.resolve("Node3D", "hide", 549441640),
        },
        object: ObjectBinds {
            get_class: r.resolve("Object", "get_class", 1167940824),
            get_instance_id: r.resolve("Object", "get_instance_id", 226389741),
            set: r.resolve("Object", "set", 1031888240),
            get: r.resolve("Object", "get", 648959708),
            has_method: r.resolve("Object", "has_method", 283851662),
            has_signal: r.resolve("Object", "has_signal", 985568283),
            emit_signal: r.resolve("Object", "emit_signal", 110695534),
            is_connected: r.resolve("Object", "is_connected", 1003696040),
        },
        ref_counted: RefCountedBinds {
            get_reference_count: r.resolve("RefCounted", "get_reference_count", 818732690),
        },
        resource: ResourceBinds {
            set_name: r.resolve("Resource", "set_name", 739488590),
            get_name: r.resolve("Resource", "get_name", 1424133279),
            set_path: r.resolve("Resource", "set_path", 2036614727),
            get_path: r.resolve("Resource", "get_path", 26573206),
            set_local_to_scene: r.resolve("Resource", "set_local_to_scene", 1930964916),
            is_local_to_scene: r.resolve("Resource", "is_local_to_scene", 1554764763),
            duplicate: r.resolve("Resource", "duplicate", 2118353938),
            emit_changed: r.resolve("Resource", "emit_changed", 395031546),
        },
        #[cfg(feature = "scene_3d")]
        soft_body_3d: SoftBody3DBinds {
            set_simulation_precision: r.resolve("SoftBody3D", "set_simulation_precision", 524100019),
            get_simulation_precision: r.resolve("SoftBody3D", "get_simulation_precision", 156287185),
            set_total_mass: r.resolve("SoftBody3D", "set_total_mass", 1686926291),
            get_total_mass: r.resolve("SoftBody3D", "get_total_mass", 462602404),
            set_pressure_coefficient: r.resolve("SoftBody3D", "set_pressure_coefficient", 1543758516),
            get_pressure_coefficient: r.resolve("SoftBody3D", "get_pressure_coefficient", 1248723926),
            set_disable_mode: r.resolve("SoftBody3D", "set_disable_mode", 1128338516),
            get_disable_mode: r.resolve("SoftBody3D", "get_disable_mode", 1901553229),
        },
        #[cfg(feature = "gui")]
        text_edit: TextEditBinds {
            set_text: r.resolve("TextEdit", "set_text", 1466854297),
            get_text: r.resolve("TextEdit", "get_text", 798970952),
            set_editable: r.resolve("TextEdit", "set_editable", 1229587174),
            is_editable: r.resolve("TextEdit", "is_editable", 1579688457),
            set_placeholder: r.resolve("TextEdit", "set_placeholder", 1910690611),
            get_placeholder: r.resolve("TextEdit", "get_placeholder", 1073490207),
            get_line_count: r.resolve("TextEdit", "get_line_count", 1062092677),
            get_line: r.resolve("TextEdit", "get_line", 1157646201),
            insert_text_at_caret: r.resolve("TextEdit", "insert_text_at_caret", 1262911714),
            clear: r.resolve("TextEdit", "clear", 551007182),
            backspace: r.resolve("TextEdit", "backspace", 665773878),
        },
        #[cfg(feature = "scene_2d")]
        tile_map: TileMapBinds {
            set_rendering_quadrant_size: r.resolve("TileMap", "set_rendering_quadrant_size", 1690459746),
            get_rendering_quadrant_size: r.resolve("TileMap", "get_rendering_quadrant_size", 1542954610),
            set_cell: r.resolve("TileMap", "set_cell", 1239774014),
            erase_cell: r.resolve("TileMap", "erase_cell", 1886466922),
            get_cell_source_id: r.resolve("TileMap", "get_cell_source_id", 1342868132),
            get_cell_atlas_coords: r.resolve("TileMap", "get_cell_atlas_coords", 1731337600),
            get_used_cells: r.resolve("TileMap", "get_used_cells", 116452140),
            clear_layer: r.resolve("TileMap", "clear_layer", 391799486),
            clear: r.resolve("TileMap", "clear", 1602056244),
            get_layers_count: r.resolve("TileMap", "get_layers_count", 448815888),
            add_layer: r.resolve("TileMap", "add_layer", 1123953590),
        },
        #[cfg(feature = "scene_3d")]
        visual_instance_3d: VisualInstance3DBinds {
            set_layer_mask: r.resolve("VisualInstance3D", "set_layer_mask", 1778241347),
            get_layer_mask: r.resolve("VisualInstance3D", "get_layer_mask", 384007220),
        },
    };
    let resolved = r.resolved();
    r.finish()?;
    log::info!("loaded {resolved} method binds");
    Ok(TABLE.get_or_init(|| table))
}

/// The loaded table. Loads on first use; an incomplete table is fatal.
pub fn binds() -> &'static BindTable {
    match load_method_binds() {
        Ok(table) => table,
        Err(err) => fatal(&format!("method bind table: {err}")),
    }
}
