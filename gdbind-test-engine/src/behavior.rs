// Per-class method behavior. Anything not special-cased falls back to the
// manifest: property setters store, property getters read (or default),
// everything else returns the default of its declared type.

use std::sync::Arc;

use gdbind_ffi::{ObjectPtr, VariantType};

use crate::geometry;
use crate::manifest::{db, MethodEntry};
use crate::object::{self, call_virtual, emit, FakeObject};
use crate::value::{
    lock, new_array, new_dictionary, new_packed, new_typed_array, Kind, PackedData, Value,
};

const ERR_UNAVAILABLE: i64 = 2;

struct Args(Vec<Value>);

impl Args {
    fn at(&self, i: usize) -> &Value {
        self.0.get(i).unwrap_or(&Value::Nil)
    }

    fn int(&self, i: usize) -> i64 {
        self.at(i).as_int()
    }

    fn float(&self, i: usize) -> f64 {
        self.at(i).as_float()
    }

    fn bool(&self, i: usize) -> bool {
        self.at(i).as_bool()
    }

    fn str(&self, i: usize) -> &str {
        self.at(i).as_str()
    }
}

fn packed_vec2(value: &Value) -> Vec<[f32; 2]> {
    match value {
        Value::Packed(p) => (0..p.len).map(|i| p.element::<[f32; 2]>(i)).collect(),
        _ => Vec::new(),
    }
}

/// Run `entry` on `ptr`. Returns the value for the return slot.
pub fn call(ptr: ObjectPtr, entry: &MethodEntry, args: Vec<Value>) -> Value {
    let ret_kind = entry.ret.as_deref().map(Kind::parse);
    let default = || ret_kind.map(Kind::default_value).unwrap_or(Value::Nil);
    let Some(obj) = object::get(ptr) else {
        let (class, name) = (&entry.class, &entry.name);
        object::push_log(2, format!("{class}.{name} called on a null or freed object"));
        return default();
    };
    let args = Args(args);
    let result = match entry.class.as_str() {
        "Object" | "RefCounted" | "Resource" => core(ptr, obj, entry, &args),
        "AudioEffectChorus" => chorus(obj, entry, &args),
        "Node" => node(ptr, obj, entry, &args),
        "Node3D" | "CanvasItem" => visibility(ptr, obj, entry, &args),
        "CSGShape3D" => csg(obj, entry),
        "NavigationMesh" => navigation(obj, entry, &args),
        "Geometry2D" => geometry2d(entry, &args),
        "TileMap" => tile_map(ptr, obj, entry, &args),
        "Control" => control(ptr, obj, entry, &args),
        "TextEdit" => text_edit(ptr, obj, entry, &args),
        "CodeEdit" => code_edit(ptr, obj, entry, &args),
        _ => None,
    };
    let result = match result {
        Some(v) => v,
        None => generic(obj, entry, args).unwrap_or_else(default),
    };
    match ret_kind {
        Some(kind) => kind.coerce(result),
        None => Value::Nil,
    }
}

fn generic(obj: &FakeObject, entry: &MethodEntry, args: Args) -> Option<Value> {
    if let Some(prop) = db().property_for_setter(&entry.class, &entry.name) {
        let kind = Kind::parse(&prop.ty);
        let value = args.0.into_iter().next().unwrap_or(Value::Nil);
        obj.set_prop(&prop.name, kind.coerce(value));
        return Some(Value::Nil);
    }
    let prop = db().property_for_getter(&entry.class, &entry.name)?;
    obj.prop(&prop.name)
}

fn core(
    ptr: ObjectPtr,
    obj: &'static FakeObject,
    entry: &MethodEntry,
    args: &Args,
) -> Option<Value> {
    let v = match entry.name.as_str() {
        "get_class" => Value::string(&obj.class()),
        "get_instance_id" => Value::Int(obj.id as i64),
        "set" => {
            obj.set_prop(args.str(0), args.at(1).clone());
            Value::Nil
        }
        "get" => obj.prop(args.str(0)).unwrap_or(Value::Nil),
        "has_method" => Value::Bool(db().has_method(&obj.engine_class(), args.str(0))),
        "has_signal" => Value::Bool(object::has_signal(ptr, args.str(0))),
        "emit_signal" => {
            if object::has_signal(ptr, args.str(0)) {
                emit(ptr, args.str(0), Vec::new());
                Value::Int(0)
            } else {
                Value::Int(ERR_UNAVAILABLE)
            }
        }
        "is_connected" => {
            let callable = match args.at(1) {
                Value::Callable(c) => c.clone(),
                _ => None,
            };
            Value::Bool(object::is_connected(ptr, args.str(0), &callable))
        }
        "get_reference_count" => Value::Int(i64::from(obj.refcount())),
        "duplicate" => {
            let copy = object::alloc(&obj.engine_class());
            if let Some(dup) = object::get(copy) {
                let props = obj.state().props.clone();
                dup.state().props = props;
                // Transferred to the caller.
                dup.reference();
            }
            Value::Object(copy)
        }
        "emit_changed" => {
            emit(ptr, "changed", Vec::new());
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

fn chorus(obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    const DEFAULTS: [(&str, [f64; 2]); 6] = [
        ("delay_ms", [15.0, 20.0]),
        ("rate_hz", [0.8, 1.2]),
        ("depth_ms", [2.0, 3.0]),
        ("level_db", [0.0, 0.0]),
        ("cutoff_hz", [8000.0, 8000.0]),
        ("pan", [-0.5, 0.5]),
    ];
    let name = entry.name.as_str();
    if let Some(field) = name.strip_prefix("set_voice_") {
        if field == "count" {
            return None;
        }
        obj.set_prop(&format!("voice/{}/{field}", args.int(0)), Value::Float(args.float(1)));
        return Some(Value::Nil);
    }
    let field = name.strip_prefix("get_voice_").filter(|f| *f != "count")?;
    let idx = args.int(0);
    let key = format!("voice/{idx}/{field}");
    let stored = obj.state().props.get(&key).cloned();
    Some(stored.unwrap_or_else(|| {
        let fallback =
            DEFAULTS.iter().find(|(f, _)| *f == field).map(|(_, d)| d[(idx as usize).min(1)]);
        Value::Float(fallback.unwrap_or(0.0))
    }))
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

fn node_name(ptr: ObjectPtr) -> String {
    object::get(ptr).and_then(|o| o.prop("name")).map(|v| v.as_str().to_owned()).unwrap_or_default()
}

fn set_node_name(ptr: ObjectPtr, obj: &FakeObject, name: &str) {
    let old = obj.set_prop("name", Value::StringName(Arc::new(name.to_owned())));
    if old.is_none_or(|o| o.as_str() != name) {
        emit(ptr, "renamed", Vec::new());
    }
}

fn add_child(parent: ObjectPtr, child: ObjectPtr, readable: bool) {
    let Some(c) = object::get(child) else {
        object::push_log(2, "add_child: child is null".to_owned());
        return;
    };
    if child == parent || c.state().parent.is_some() {
        object::push_log(2, "add_child: child already has a parent".to_owned());
        return;
    }
    if node_name(child).is_empty() {
        let class = c.engine_class();
        let name = if readable { class } else { format!("@{class}@{}", c.id) };
        c.set_prop("name", Value::StringName(Arc::new(name)));
    }
    c.state().parent = Some(parent);
    if let Some(p) = object::get(parent) {
        p.state().children.push(child);
    }
    call_virtual(child, "_enter_tree", Vec::new());
    emit(child, "tree_entered", Vec::new());
    emit(parent, "child_entered_tree", vec![Value::Object(child)]);
    call_virtual(child, "_ready", Vec::new());
    emit(child, "ready", Vec::new());
}

fn remove_child(parent: ObjectPtr, obj: &FakeObject, child: ObjectPtr) {
    let Some(c) = object::get(child) else {
        return;
    };
    if c.state().parent != Some(parent) {
        object::push_log(2, "remove_child: not a child of this node".to_owned());
        return;
    }
    emit(child, "tree_exiting", Vec::new());
    call_virtual(child, "_exit_tree", Vec::new());
    obj.state().children.retain(|x| *x != child);
    c.state().parent = None;
}

fn node_path(ptr: ObjectPtr) -> String {
    let mut names = Vec::new();
    let mut current = Some(ptr);
    while let Some(p) = current {
        names.push(node_name(p));
        current = object::get(p).and_then(|o| o.state().parent);
    }
    names.reverse();
    format!("/{}", names.join("/"))
}

fn find_node(from: ObjectPtr, path: &str) -> ObjectPtr {
    let mut current = from;
    if let Some(rest) = path.strip_prefix('/') {
        while let Some(parent) = object::get(current).and_then(|o| o.state().parent) {
            current = parent;
        }
        let mut parts = rest.split('/').filter(|s| !s.is_empty());
        match parts.next() {
            Some(root) if node_name(current) == root => {}
            _ => return ObjectPtr::NULL,
        }
        return walk(current, parts);
    }
    walk(current, path.split('/').filter(|s| !s.is_empty()))
}

fn walk<'a>(mut current: ObjectPtr, parts: impl Iterator<Item = &'a str>) -> ObjectPtr {
    for part in parts {
        let Some(obj) = object::get(current) else {
            return ObjectPtr::NULL;
        };
        current = match part {
            "." => current,
            ".." => obj.state().parent.unwrap_or(ObjectPtr::NULL),
            name => {
                let children = obj.state().children.clone();
                children.into_iter().find(|c| node_name(*c) == name).unwrap_or(ObjectPtr::NULL)
            }
        };
    }
    current
}

fn node(
    ptr: ObjectPtr,
    obj: &'static FakeObject,
    entry: &MethodEntry,
    args: &Args,
) -> Option<Value> {
    let v = match entry.name.as_str() {
        "set_name" => {
            set_node_name(ptr, obj, args.str(0));
            Value::Nil
        }
        "add_child" => {
            add_child(ptr, args.at(0).as_object(), args.bool(1));
            Value::Nil
        }
        "remove_child" => {
            remove_child(ptr, obj, args.at(0).as_object());
            Value::Nil
        }
        "get_child_count" => Value::Int(obj.state().children.len() as i64),
        "get_child" => {
            let children = obj.state().children.clone();
            let len = children.len() as i64;
            let idx = if args.int(0) < 0 { len + args.int(0) } else { args.int(0) };
            let child = usize::try_from(idx).ok().and_then(|i| children.get(i).copied());
            Value::Object(child.unwrap_or(ObjectPtr::NULL))
        }
        "get_parent" => Value::Object(obj.state().parent.unwrap_or(ObjectPtr::NULL)),
        "get_path" => Value::NodePath(Arc::new(node_path(ptr))),
        "get_node_or_null" => Value::Object(find_node(ptr, args.str(0))),
        "is_inside_tree" => {
            let state = obj.state();
            Value::Bool(state.parent.is_some() || !state.children.is_empty())
        }
        "queue_free" => {
            object::destroy(ptr);
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

fn visibility(ptr: ObjectPtr, obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let visible = match entry.name.as_str() {
        "show" => true,
        "hide" => false,
        "set_visible" => args.bool(0),
        "translate" => {
            let [x, y, z] = obj.prop("position").map(|p| p.as_vector3()).unwrap_or_default();
            let [dx, dy, dz] = args.at(0).as_vector3();
            obj.set_prop("position", Value::Vector3([x + dx, y + dy, z + dz]));
            return Some(Value::Nil);
        }
        "queue_redraw" => {
            call_virtual(ptr, "_draw", Vec::new());
            emit(ptr, "draw", Vec::new());
            return Some(Value::Nil);
        }
        _ => return None,
    };
    let was = obj.prop("visible").is_none_or(|v| v.as_bool());
    obj.set_prop("visible", Value::Bool(visible));
    if was != visible {
        emit(ptr, "visibility_changed", Vec::new());
    }
    Some(Value::Nil)
}

fn csg(obj: &FakeObject, entry: &MethodEntry) -> Option<Value> {
    match entry.name.as_str() {
        "is_root_shape" => {
            let parent = obj.state().parent;
            let nested = parent
                .and_then(object::get)
                .is_some_and(|p| object::is_subclass(&p.class(), "CSGShape3D"));
            Some(Value::Bool(!nested))
        }
        "get_meshes" => Some(new_array(Vec::new())),
        _ => None,
    }
}

fn navigation(obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "add_polygon" => {
            obj.state().polygons.push(args.at(0).clone());
            Value::Nil
        }
        "get_polygon_count" => Value::Int(obj.state().polygons.len() as i64),
        "get_polygon" => {
            let state = obj.state();
            let found =
                usize::try_from(args.int(0)).ok().and_then(|i| state.polygons.get(i).cloned());
            found.unwrap_or_else(|| {
                Value::Packed(Arc::new(PackedData::new(VariantType::PACKED_INT32_ARRAY)))
            })
        }
        "clear_polygons" => {
            obj.state().polygons.clear();
            Value::Nil
        }
        "clear" => {
            let mut state = obj.state();
            state.polygons.clear();
            state.props.remove("vertices");
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

fn geometry2d(entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "is_polygon_clockwise" => {
            Value::Bool(geometry::is_polygon_clockwise(&packed_vec2(args.at(0))))
        }
        "is_point_in_circle" => Value::Bool(geometry::is_point_in_circle(
            args.at(0).as_vector2(),
            args.at(1).as_vector2(),
            args.float(2) as f32,
        )),
        "is_point_in_polygon" => {
            let polygon = packed_vec2(args.at(1));
            Value::Bool(geometry::is_point_in_polygon(args.at(0).as_vector2(), &polygon))
        }
        "triangulate_polygon" => {
            let indices = geometry::triangulate(&packed_vec2(args.at(0)));
            new_packed(VariantType::PACKED_INT32_ARRAY, &indices)
        }
        "get_closest_point_to_segment" => Value::Vector2(geometry::closest_point_to_segment(
            args.at(0).as_vector2(),
            args.at(1).as_vector2(),
            args.at(2).as_vector2(),
        )),
        _ => return None,
    };
    Some(v)
}

// ---------------------------------------------------------------------------
// TileMap
// ---------------------------------------------------------------------------

/// Resolve a layer argument; negative values count from the end.
fn layer_index(obj: &FakeObject, layer: i64) -> Option<i64> {
    let count = obj.state().layers;
    let idx = if layer < 0 { count + layer } else { layer };
    if (0..count).contains(&idx) {
        Some(idx)
    } else {
        object::push_log(2, format!("TileMap: invalid layer {layer}"));
        None
    }
}

fn tile_map(ptr: ObjectPtr, obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "set_cell" | "erase_cell" => {
            let Some(layer) = layer_index(obj, args.int(0)) else {
                return Some(Value::Nil);
            };
            let coords = args.at(1).as_vector2i();
            let source = if entry.name == "erase_cell" { -1 } else { args.int(2) };
            {
                let mut state = obj.state();
                let existing =
                    state.cells.iter().position(|c| c.layer == layer && c.coords == coords);
                match (existing, source) {
                    (Some(i), -1) => {
                        state.cells.remove(i);
                    }
                    (None, -1) => {}
                    (Some(i), _) => {
                        let cell = &mut state.cells[i];
                        cell.source = source;
                        cell.atlas = args.at(3).as_vector2i();
                        cell.alternative = args.int(4);
                    }
                    (None, _) => state.cells.push(object::Cell {
                        layer,
                        coords,
                        source,
                        atlas: args.at(3).as_vector2i(),
                        alternative: args.int(4),
                    }),
                }
            }
            let update = vec![Value::Int(layer), Value::Vector2i(coords)];
            call_virtual(ptr, "_use_tile_data_runtime_update", update);
            emit(ptr, "changed", Vec::new());
            Value::Nil
        }
        "get_cell_source_id" | "get_cell_atlas_coords" => {
            let cell = layer_index(obj, args.int(0)).and_then(|layer| {
                let coords = args.at(1).as_vector2i();
                obj.state().cells.iter().find(|c| c.layer == layer && c.coords == coords).cloned()
            });
            if entry.name == "get_cell_source_id" {
                Value::Int(cell.map_or(-1, |c| c.source))
            } else {
                Value::Vector2i(cell.map_or([-1, -1], |c| c.atlas))
            }
        }
        "get_used_cells" => {
            let items = match layer_index(obj, args.int(0)) {
                Some(layer) => obj
                    .state()
                    .cells
                    .iter()
                    .filter(|c| c.layer == layer)
                    .map(|c| Value::Vector2i(c.coords))
                    .collect(),
                None => Vec::new(),
            };
            new_typed_array(items, VariantType::VECTOR2I)
        }
        "clear_layer" => {
            if let Some(layer) = layer_index(obj, args.int(0)) {
                obj.state().cells.retain(|c| c.layer != layer);
                emit(ptr, "changed", Vec::new());
            }
            Value::Nil
        }
        "clear" => {
            obj.state().cells.clear();
            emit(ptr, "changed", Vec::new());
            Value::Nil
        }
        "get_layers_count" => Value::Int(obj.state().layers),
        "add_layer" => {
            let mut state = obj.state();
            let count = state.layers;
            let at = args.int(0);
            let pos = if at < 0 || at > count { count } else { at };
            for cell in state.cells.iter_mut().filter(|c| c.layer >= pos) {
                cell.layer += 1;
            }
            state.layers += 1;
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

// ---------------------------------------------------------------------------
// Control, TextEdit, CodeEdit
// ---------------------------------------------------------------------------

fn control(ptr: ObjectPtr, obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "grab_focus" => {
            let gained = !std::mem::replace(&mut obj.state().focus, true);
            if gained {
                emit(ptr, "focus_entered", Vec::new());
            }
            Value::Nil
        }
        "has_focus" => Value::Bool(obj.state().focus),
        "set_size" => {
            let size = args.at(0).as_vector2();
            let old = obj.set_prop("size", Value::Vector2(size));
            if old.is_none_or(|o| o.as_vector2() != size) {
                emit(ptr, "resized", Vec::new());
            }
            Value::Nil
        }
        "get_combined_minimum_size" => {
            let custom =
                obj.prop("custom_minimum_size").map(|v| v.as_vector2()).unwrap_or_default();
            let own = call_virtual(ptr, "_get_minimum_size", Vec::new())
                .map(|v| v.as_vector2())
                .unwrap_or_default();
            Value::Vector2([custom[0].max(own[0]), custom[1].max(own[1])])
        }
        _ => return None,
    };
    Some(v)
}

fn text(obj: &FakeObject) -> String {
    obj.prop("text").map(|v| v.as_str().to_owned()).unwrap_or_default()
}

fn set_text(ptr: ObjectPtr, obj: &FakeObject, text: String) {
    obj.set_prop("text", Value::String(Arc::new(text)));
    emit(ptr, "text_changed", Vec::new());
}

fn editable(obj: &FakeObject) -> bool {
    obj.prop("editable").is_none_or(|v| v.as_bool())
}

fn insert_at_caret(ptr: ObjectPtr, obj: &FakeObject, insert: &str) {
    let mut current = text(obj);
    let from = current.matches('\n').count() as i64;
    current.push_str(insert);
    let to = current.matches('\n').count() as i64;
    obj.set_prop("text", Value::String(Arc::new(current)));
    emit(ptr, "lines_edited_from", vec![Value::Int(from), Value::Int(to)]);
    emit(ptr, "text_changed", Vec::new());
}

fn text_edit(ptr: ObjectPtr, obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "set_text" => {
            set_text(ptr, obj, args.str(0).to_owned());
            Value::Nil
        }
        "get_line_count" => Value::Int(text(obj).split('\n').count() as i64),
        "get_line" => {
            let current = text(obj);
            let line = usize::try_from(args.int(0)).ok().and_then(|i| current.split('\n').nth(i));
            Value::string(line.unwrap_or(""))
        }
        "insert_text_at_caret" => {
            if editable(obj) {
                insert_at_caret(ptr, obj, args.str(0));
            }
            Value::Nil
        }
        "clear" => {
            set_text(ptr, obj, String::new());
            Value::Nil
        }
        "backspace" => {
            let count = vec![Value::Int(args.int(0))];
            if editable(obj) && call_virtual(ptr, "_backspace", count).is_none() {
                let mut current = text(obj);
                if current.pop().is_some() {
                    set_text(ptr, obj, current);
                }
            }
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

fn completion_option(args: &Args) -> Value {
    let key = Value::string;
    new_dictionary(vec![
        (key("kind"), Value::Int(args.int(0))),
        (key("display_text"), Value::string(args.str(1))),
        (key("insert_text"), Value::string(args.str(2))),
        (key("font_color"), args.at(3).clone()),
        (key("icon"), args.at(4).clone()),
        (key("default_value"), args.at(5).clone()),
        (key("location"), Value::Int(args.int(6))),
    ])
}

fn code_edit(ptr: ObjectPtr, obj: &FakeObject, entry: &MethodEntry, args: &Args) -> Option<Value> {
    let v = match entry.name.as_str() {
        "add_code_completion_option" => {
            obj.state().pending_options.push(completion_option(args));
            Value::Nil
        }
        "update_code_completion_options" => {
            let candidates = std::mem::take(&mut obj.state().pending_options);
            let filtered = call_virtual(
                ptr,
                "_filter_code_completion_candidates",
                vec![new_typed_array(candidates.clone(), VariantType::DICTIONARY)],
            );
            let options = match filtered {
                Some(Value::Array(a)) => lock(&a).items.clone(),
                _ => candidates,
            };
            obj.state().options = options;
            Value::Nil
        }
        "get_code_completion_options" => {
            new_typed_array(obj.state().options.clone(), VariantType::DICTIONARY)
        }
        "request_code_completion" => {
            let force = vec![Value::Bool(args.bool(0))];
            if call_virtual(ptr, "_request_code_completion", force).is_none() {
                emit(ptr, "code_completion_requested", Vec::new());
            }
            Value::Nil
        }
        "confirm_code_completion" => {
            let replace = vec![Value::Bool(args.bool(0))];
            if call_virtual(ptr, "_confirm_code_completion", replace).is_none() {
                let first = obj.state().options.first().cloned();
                let insert = match first {
                    Some(Value::Dictionary(d)) => {
                        lock(&d).get(&Value::string("insert_text")).map(|v| v.as_str().to_owned())
                    }
                    _ => None,
                };
                if let Some(insert) = insert {
                    insert_at_caret(ptr, obj, &insert);
                }
            }
            obj.state().options.clear();
            Value::Nil
        }
        "cancel_code_completion" => {
            let mut state = obj.state();
            state.options.clear();
            state.pending_options.clear();
            Value::Nil
        }
        _ => return None,
    };
    Some(v)
}

