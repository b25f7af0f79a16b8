// Per-class façade files: the Instance type, its Advanced view, class enums,
// registration and signal connectors.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::context::CodegenContext;
use crate::naming::{escape_reserved, to_screaming_snake, to_snake_case};
use crate::schema::{ClassInfo, MethodInfo, PropertyInfo, SignalInfo};
use crate::type_map::{ReturnOwnership, TypeKind};

use super::{cfg_attr, enums, HEADER};

/// Upper bound on arguments a call frame carries.
const MAX_ARGS: usize = 16;

pub(crate) struct Param {
    pub name: String,
    pub kind: TypeKind,
    /// Declared with a `null` default: the Instance signature keeps `Option`.
    pub nullable: bool,
}

/// A method whose every type maps to a bridge.
pub(crate) struct BoundMethod<'a> {
    pub info: &'a MethodInfo,
    pub rust_name: String,
    pub params: Vec<Param>,
    pub ret: Option<TypeKind>,
    /// Features needed beyond the class's own.
    pub features: BTreeSet<String>,
}

fn param_name(name: &str) -> String {
    match name {
        "frame" | "ret" => format!("{name}_"),
        _ => escape_reserved(&to_snake_case(name)),
    }
}

/// Record the feature gating `kind` when `class`'s module does not reach it.
fn note_feature(
    class: &str,
    kind: &TypeKind,
    ctx: &CodegenContext,
    features: &mut BTreeSet<String>,
) {
    if let Some(other) = kind.referenced_class() {
        if !ctx.reaches(class, other) {
            if let Some(feature) = ctx.feature_of(other) {
                features.insert(feature.to_owned());
            }
        }
    }
}

fn bind_method<'a>(
    class: &ClassInfo,
    m: &'a MethodInfo,
    ctx: &CodegenContext,
) -> Option<BoundMethod<'a>> {
    let mut features = BTreeSet::new();
    let mut params = Vec::with_capacity(m.arguments.len());
    for a in &m.arguments {
        let kind = TypeKind::parse(&a.ty, a.meta.as_deref(), ctx)?;
        note_feature(&class.name, &kind, ctx, &mut features);
        let nullable = a.default_value.as_deref() == Some("null");
        params.push(Param { name: param_name(&a.name), kind, nullable });
    }
    let ret = match &m.return_value {
        Some(r) => {
            let kind = TypeKind::parse(&r.ty, r.meta.as_deref(), ctx)?;
            note_feature(&class.name, &kind, ctx, &mut features);
            Some(kind)
        }
        None => None,
    };
    Some(BoundMethod { info: m, rust_name: escape_reserved(&m.name), params, ret, features })
}

/// Methods of `class` that get a forwarder (and a bind table entry).
pub(crate) fn bound_methods<'a>(
    class: &'a ClassInfo,
    ctx: &CodegenContext,
) -> Vec<BoundMethod<'a>> {
    let mut out = Vec::new();
    for m in class.methods.iter().filter(|m| !m.is_virtual) {
        if m.is_static || m.is_vararg {
            log::debug!(
                "skipping {}.{}: static and vararg methods are not bound",
                class.name,
                m.name
            );
            continue;
        }
        if m.arguments.len() > MAX_ARGS {
            log::debug!("skipping {}.{}: {} arguments", class.name, m.name, m.arguments.len());
            continue;
        }
        match bind_method(class, m, ctx) {
            Some(bound) if bound.rust_name == "instance" => {
                log::debug!("skipping {}.{}: name is reserved on Advanced", class.name, m.name);
            }
            Some(bound) => out.push(bound),
            None => log::debug!(
                "skipping {}.{}: unsupported argument or return type",
                class.name,
                m.name
            ),
        }
    }
    out
}

struct BoundSignal<'a> {
    info: &'a SignalInfo,
    args: Vec<TypeKind>,
    features: BTreeSet<String>,
}

fn bound_signals<'a>(class: &'a ClassInfo, ctx: &CodegenContext) -> Vec<BoundSignal<'a>> {
    let mut out = Vec::new();
    'signals: for s in &class.signals {
        let mut features = BTreeSet::new();
        let mut args = Vec::new();
        for a in &s.arguments {
            let Some(kind) = TypeKind::parse(&a.ty, a.meta.as_deref(), ctx) else {
                log::debug!(
                    "skipping signal {}.{}: unsupported argument {}",
                    class.name,
                    s.name,
                    a.ty
                );
                continue 'signals;
            };
            note_feature(&class.name, &kind, ctx, &mut features);
            args.push(kind);
        }
        out.push(BoundSignal { info: s, args, features });
    }
    out
}

/// A property exposed on the Instance level through its accessors.
struct BoundProperty<'m, 'a> {
    info: &'a PropertyInfo,
    name: String,
    getter: Option<&'m BoundMethod<'a>>,
    setter: Option<&'m BoundMethod<'a>>,
}

fn bound_properties<'m, 'a>(
    class: &'a ClassInfo,
    methods: &'m [BoundMethod<'a>],
) -> Vec<BoundProperty<'m, 'a>> {
    let find = |name: &Option<String>, arity: usize| {
        let name = name.as_deref()?;
        methods.iter().find(|m| m.info.name == name && m.params.len() == arity)
    };
    class
        .properties
        .iter()
        .filter(|p| !p.name.contains('/'))
        .filter_map(|p| {
            let getter = find(&p.getter, 0).filter(|g| g.ret.is_some());
            let setter = find(&p.setter, 1);
            if getter.is_none() && setter.is_none() {
                log::debug!("property {}.{} has no bound accessor", class.name, p.name);
                return None;
            }
            Some(BoundProperty { info: p, name: escape_reserved(&p.name), getter, setter })
        })
        .collect()
}

/// Generate the Rust file for one class.
pub fn generate_class(class: &ClassInfo, ctx: &CodegenContext) -> String {
    let name = class.name.as_str();
    let snake = to_snake_case(name);
    let ancestors = ctx.ancestors(name);
    let base = ancestors.first().copied();
    let ref_counted = ctx.is_ref_counted(name);
    let handle_ty = if ref_counted { "RefHandle" } else { "ObjectRef" };

    let methods = bound_methods(class, ctx);
    let properties = bound_properties(class, &methods);
    let signals = bound_signals(class, ctx);

    let mut out = String::with_capacity(8192);
    out.push_str(HEADER);
    out.push_str(&format!("// Engine version: {}\n\n", ctx.engine_version));
    out.push_str("#![allow(unused_imports, clippy::too_many_arguments)]\n\n");
    out.push_str("use std::any::Any;\n");
    if base.is_some() {
        out.push_str("use std::ops::Deref;\n");
    }
    out.push_str("\nuse gdbind_runtime::*;\n\n");
    out.push_str("use crate::bind_table::binds;\n");
    out.push_str(&imports(class, &ancestors, &methods, &signals, ctx));
    out.push('\n');

    // -- Instance type -------------------------------------------------------

    match base {
        Some(base) => out.push_str(&format!("/// Engine class `{name}` (inherits `{base}`).\n")),
        None => {
            out.push_str(&format!("/// Engine class `{name}`, the root of every class chain.\n"))
        }
    }
    out.push_str("#[repr(transparent)]\n");
    if ref_counted {
        out.push_str("#[derive(Clone, PartialEq, Eq, Debug, Default)]\n");
    } else {
        out.push_str("#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]\n");
    }
    out.push_str(&format!("pub struct {name}({handle_ty});\n\n"));

    let virtuals: Vec<String> =
        class.methods.iter().filter(|m| m.is_virtual).map(|m| format!("\"{}\"", m.name)).collect();
    let from_handle =
        if ref_counted { "unsafe { RefHandle::adopt(ptr) }" } else { "ObjectRef::from_ptr(ptr)" };
    let virtual_owner = if base.is_some() {
        "find_virtual::<Self>(name)".to_owned()
    } else {
        "if Self::VIRTUALS.contains(&name) { Some(Self::CLASS_NAME) } else { None }".to_owned()
    };
    out.push_str(&format!(
        "impl EngineClass for {name} {{\n\
         \x20   const CLASS_NAME: &'static str = \"{name}\";\n\
         \x20   const REF_COUNTED: bool = {ref_counted};\n\
         \x20   const VIRTUALS: &'static [&'static str] = &[{}];\n\n\
         \x20   unsafe fn from_handle(ptr: ObjectPtr) -> Self {{\n\
         \x20       {name}({from_handle})\n\
         \x20   }}\n\n\
         \x20   fn handle(&self) -> ObjectPtr {{\n\
         \x20       self.0.ptr()\n\
         \x20   }}\n\n\
         \x20   fn virtual_owner(name: &str) -> Option<&'static str> {{\n\
         \x20       {virtual_owner}\n\
         \x20   }}\n\
         }}\n\n",
        virtuals.join(", ")
    ));

    for (owner, m) in chain_virtuals(name, &ancestors, ctx) {
        out.push_str(&overridable_impl(name, owner, m, ctx));
    }

    if let Some(base) = base {
        out.push_str(&format!("impl HasBase for {name} {{\n    type Base = {base};\n}}\n\n"));
        for ancestor in &ancestors {
            out.push_str(&format!("unsafe impl Inherits<{ancestor}> for {name} {{}}\n"));
        }
        out.push_str(&format!(
            "\nimpl Deref for {name} {{\n\
             \x20   type Target = {base};\n\n\
             \x20   fn deref(&self) -> &{base} {{\n\
             \x20       upcast_ref(self)\n\
             \x20   }}\n\
             }}\n\n"
        ));
    }

    let parent = base.map_or("None".to_owned(), |b| format!("Some(\"{b}\")"));
    out.push_str(&format!(
        "fn wrap_handle(ptr: ObjectPtr) -> Box<dyn Any> {{\n\
         \x20   Box::new(unsafe {{ adopt::<{name}>(ptr, Ownership::Acquire) }}\
         .unwrap_or_default())\n\
         }}\n\n\
         gdbind_runtime::__inventory::submit! {{\n\
         \x20   ClassRegistration {{ name: \"{name}\", parent: {parent}, \
         ref_counted: {ref_counted}, construct: wrap_handle }}\n\
         }}\n\n"
    ));

    if ctx.is_singleton(name) {
        let static_name = to_screaming_snake(name);
        out.push_str(&format!(
            "/// The engine's `{name}` singleton, fetched on first use.\n\
             pub static {static_name}: Singleton<{name}> = Singleton::new(\"{name}\");\n\n"
        ));
    }

    out.push_str(&format!("impl {name} {{\n"));
    out.push_str(&format!("    pub const NIL: Self = {name}({handle_ty}::NIL);\n\n"));
    let mut taken: HashSet<String> =
        ["NIL", "advanced", "new", "singleton"].into_iter().map(str::to_owned).collect();

    if ctx.is_singleton(name) {
        out.push_str(&format!(
            "    pub fn singleton() -> Self {{\n        {}.get()\n    }}\n\n",
            to_screaming_snake(name)
        ));
    } else if class.is_instantiable {
        out.push_str("    /// Construct a new engine instance.\n");
        out.push_str("    pub fn new() -> Self {\n        construct::<Self>()\n    }\n\n");
    }

    out.push_str(
        "    /// Every bound method under its engine name, with canonical carriers.\n\
         \x20   pub fn advanced(&self) -> &Advanced {\n\
         \x20       // SAFETY: `Advanced` is `#[repr(transparent)]` over `Self`.\n\
         \x20       unsafe { &*(self as *const Self).cast::<Advanced>() }\n\
         \x20   }\n",
    );

    for ancestor in &ancestors {
        let fn_name = format!("as_{}", to_snake_case(ancestor));
        taken.insert(fn_name.clone());
        out.push_str(&format!(
            "\n    pub fn {fn_name}(&self) -> &{ancestor} {{\n        upcast_ref(self)\n    }}\n"
        ));
    }

    let mut consumed: HashSet<&str> = HashSet::new();
    for prop in &properties {
        out.push_str(&instance_property(name, prop, &mut taken, &mut consumed));
    }
    for m in &methods {
        if consumed.contains(m.info.name.as_str()) {
            continue;
        }
        if !taken.insert(m.rust_name.clone()) {
            log::debug!("{name}.{}: name already used on the Instance level", m.info.name);
            continue;
        }
        out.push_str(&instance_method(m));
    }
    for s in &signals {
        let fn_name = format!("on_{}", to_snake_case(&s.info.name));
        if !taken.insert(fn_name.clone()) {
            log::debug!("{name}: signal connector {fn_name} clashes with a method");
            continue;
        }
        out.push_str(&signal_connector(&fn_name, s, ctx));
    }
    out.push_str("}\n\n");

    // -- Advanced view -------------------------------------------------------

    out.push_str(&format!(
        "/// Raw surface of [`{name}`]: engine method names and canonical carriers.\n\
         #[repr(transparent)]\n\
         pub struct Advanced({name});\n\n\
         impl Advanced {{\n\
         \x20   pub fn instance(&self) -> &{name} {{\n\
         \x20       &self.0\n\
         \x20   }}\n"
    ));
    for m in &methods {
        out.push_str(&advanced_method(&snake, m));
    }
    out.push_str("}\n\n");

    if let Some(base) = base {
        out.push_str(&format!(
            "impl Deref for Advanced {{\n\
             \x20   type Target = {}::Advanced;\n\n\
             \x20   fn deref(&self) -> &Self::Target {{\n\
             \x20       self.0.as_{}().advanced()\n\
             \x20   }}\n\
             }}\n",
            ctx.class_module_path(base),
            to_snake_case(base)
        ));
    }

    for e in &class.enums {
        out.push('\n');
        out.push_str(&enums::generate_enum(e, Some(name)));
    }
    out
}

/// Overridables of `class` and every ancestor, nearest declaration first.
fn chain_virtuals<'a>(
    class: &'a str,
    ancestors: &[&'a str],
    ctx: &'a CodegenContext,
) -> Vec<(&'a str, &'a MethodInfo)> {
    std::iter::once(class)
        .chain(ancestors.iter().copied())
        .filter_map(|c| ctx.classes.get(c))
        .flat_map(|c| c.methods.iter().filter(|m| m.is_virtual).map(move |m| (c.name.as_str(), m)))
        .collect()
}

/// `Overridable` impl giving the typed signature of `m` on `class`. Empty
/// when a type has no bridge; the overridable then takes no typed override.
fn overridable_impl(class: &str, owner: &str, m: &MethodInfo, ctx: &CodegenContext) -> String {
    let mut features = BTreeSet::new();
    let mut params = Vec::with_capacity(m.arguments.len());
    for a in &m.arguments {
        let Some(kind) = TypeKind::parse(&a.ty, a.meta.as_deref(), ctx) else {
            log::debug!("{owner}.{}: no typed override for argument {}", m.name, a.ty);
            return String::new();
        };
        note_feature(class, &kind, ctx, &mut features);
        params.push(kind.virtual_param());
    }
    let ret = match &m.return_value {
        Some(r) => {
            let Some(kind) = TypeKind::parse(&r.ty, r.meta.as_deref(), ctx) else {
                log::debug!("{owner}.{}: no typed override for return {}", m.name, r.ty);
                return String::new();
            };
            note_feature(class, &kind, ctx, &mut features);
            format!(" -> {}", kind.virtual_ret())
        }
        None => String::new(),
    };
    format!(
        "{}impl Overridable<crate::virtuals::{}> for {class} {{\n\
         \x20   type Signature = fn({}){ret};\n\
         }}\n\n",
        cfg_attr(&features, ""),
        m.name,
        params.join(", ")
    )
}

/// `use` lines for every class the file names, gated when the module of the
/// class is not always compiled alongside this one.
fn imports(
    class: &ClassInfo,
    ancestors: &[&str],
    methods: &[BoundMethod<'_>],
    signals: &[BoundSignal<'_>],
    ctx: &CodegenContext,
) -> String {
    let mut names: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for ancestor in ancestors {
        names.entry((*ancestor).to_owned()).or_default();
    }
    let kinds = methods
        .iter()
        .flat_map(|m| m.params.iter().map(|p| &p.kind).chain(m.ret.iter()))
        .chain(signals.iter().flat_map(|s| s.args.iter()));
    for kind in kinds {
        if let TypeKind::Object { class: other } = kind {
            if other == &class.name {
                continue;
            }
            let mut features = BTreeSet::new();
            note_feature(&class.name, kind, ctx, &mut features);
            names.entry(other.clone()).or_default().extend(features);
        }
    }
    let mut out = String::new();
    for (other, features) in names {
        out.push_str(&cfg_attr(&features, ""));
        out.push_str(&format!("use crate::{other};\n"));
    }
    out
}

fn instance_property<'a>(
    class: &str,
    prop: &BoundProperty<'_, 'a>,
    taken: &mut HashSet<String>,
    consumed: &mut HashSet<&'a str>,
) -> String {
    let mut out = String::new();
    if let Some(getter) = prop.getter {
        let kind = getter.ret.as_ref().map(TypeKind::instance_ret).unwrap_or_default();
        if taken.insert(prop.name.clone()) {
            consumed.insert(getter.info.name.as_str());
            let call = format!("self.advanced().{}()", getter.rust_name);
            let body = getter.ret.as_ref().map_or(call.clone(), |k| k.instance_ret_convert(&call));
            out.push('\n');
            out.push_str(&cfg_attr(&getter.features, "    "));
            out.push_str(&format!(
                "    /// Property `{}`.\n\
                 \x20   pub fn {}(&self) -> {kind} {{\n\
                 \x20       {body}\n\
                 \x20   }}\n",
                prop.info.name, prop.name
            ));
        } else {
            log::debug!("{class}.{}: getter name already used", prop.info.name);
        }
    }
    if let Some(setter) = prop.setter {
        let setter_name = format!("set_{}", prop.info.name);
        if taken.insert(setter_name.clone()) {
            consumed.insert(setter.info.name.as_str());
            let param = &setter.params[0];
            let nullable = param.nullable || matches!(param.kind, TypeKind::Object { .. });
            out.push('\n');
            out.push_str(&cfg_attr(&setter.features, "    "));
            out.push_str(&format!(
                "    pub fn {setter_name}(&self, value: {}) {{\n\
                 \x20       self.advanced().{}({})\n\
                 \x20   }}\n",
                param.kind.instance_param(nullable),
                setter.rust_name,
                param.kind.instance_arg("value", nullable)
            ));
        } else {
            log::debug!("{class}.{}: setter name already used", prop.info.name);
        }
    }
    out
}

fn instance_method(m: &BoundMethod<'_>) -> String {
    let params: Vec<String> = m
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.kind.instance_param(p.nullable)))
        .collect();
    let args: Vec<String> =
        m.params.iter().map(|p| p.kind.instance_arg(&p.name, p.nullable)).collect();
    let call = format!("self.advanced().{}({})", m.rust_name, args.join(", "));
    let (ret, body) = match &m.ret {
        Some(kind) => (format!(" -> {}", kind.instance_ret()), kind.instance_ret_convert(&call)),
        None => (String::new(), call),
    };
    let mut out = String::new();
    out.push('\n');
    out.push_str(&cfg_attr(&m.features, "    "));
    out.push_str(&format!(
        "    pub fn {}(&self{}{}){ret} {{\n        {body}\n    }}\n",
        m.rust_name,
        if params.is_empty() { "" } else { ", " },
        params.join(", ")
    ));
    out
}

fn advanced_method(class_snake: &str, m: &BoundMethod<'_>) -> String {
    let params: Vec<String> =
        m.params.iter().map(|p| format!("{}: {}", p.name, p.kind.advanced_param())).collect();
    let bind = format!("binds().{class_snake}.{}", m.rust_name);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&cfg_attr(&m.features, "    "));
    let ret = m.ret.as_ref().map_or(String::new(), |k| format!(" -> {}", k.advanced_ret()));
    out.push_str(&format!(
        "    pub fn {}(&self{}{}){ret} {{\n",
        m.rust_name,
        if params.is_empty() { "" } else { ", " },
        params.join(", ")
    ));

    let call = if m.ret.is_some() { "call_ret" } else { "call" };
    let invoke = if m.params.is_empty() {
        format!("unsafe {{ CallFrame::new().{call}({bind}, self.0.handle()) }}")
    } else {
        let args: String =
            m.params.iter().map(|p| format!(".arg({})", p.kind.frame_arg(&p.name))).collect();
        out.push_str(&format!("        let mut frame = CallFrame::new();\n        frame{args};\n"));
        format!("unsafe {{ frame.{call}({bind}, self.0.handle()) }}")
    };

    let ownership = m.info.return_value.as_ref().and_then(|r| r.ownership.as_deref());
    let ownership = ReturnOwnership::parse(ownership);
    match m.ret.as_ref().and_then(|k| k.ret_convert(ownership).map(|c| (k, c))) {
        Some((kind, convert)) => {
            let wire = kind.ret_wire();
            out.push_str(&format!("        let ret: {wire} = {invoke};\n        {convert}\n"));
        }
        None => out.push_str(&format!("        {invoke}\n")),
    }
    out.push_str("    }\n");
    out
}

fn signal_connector(fn_name: &str, s: &BoundSignal<'_>, ctx: &CodegenContext) -> String {
    let types: Vec<String> = s.args.iter().map(TypeKind::signal_type).collect();
    let reads: Vec<String> = s.args.iter().enumerate().map(|(i, k)| k.signal_read(i)).collect();
    let closure_arg = if s.args.is_empty() { "_" } else { "args" };
    let (ret, wrap) = if ctx.has_global_enum("Error") {
        (" -> crate::global_enums::Error", "crate::global_enums::Error::from_ord(code)")
    } else {
        (" -> i64", "code")
    };
    let mut out = String::new();
    out.push('\n');
    out.push_str(&cfg_attr(&s.features, "    "));
    out.push_str(&format!(
        "    /// Connect `f` to the `{signal}` signal.\n\
         \x20   pub fn {fn_name}(&self, mut f: impl FnMut({}) + 'static){ret} {{\n\
         \x20       let code = signal::connect_fn(self.handle(), \"{signal}\", \
         move |{closure_arg}| {{\n\
         \x20           f({});\n\
         \x20           Variant::nil()\n\
         \x20       }});\n\
         \x20       {wrap}\n\
         \x20   }}\n",
        types.join(", "),
        reads.join(", "),
        signal = s.info.name,
    ));
    out
}
