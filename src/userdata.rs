use gc_arena::{Gc, Mutation};
use hashbrown::HashMap;

use crate::{error::ListError, list::LinkedList, value::Value};

/// Result type for dispatched method calls
pub type InnerResult<'gc> = Result<Value<'gc>, ListError>;

/// Contract a type must satisfy for a host runtime to wrap it as an
/// object of its own. Together with `Collect::trace` (reporting held
/// handles to the collector) and `Drop` (releasing externally owned
/// memory) this covers the trace/release/measure capabilities a host
/// embedding mechanism asks for.
pub trait UserData<'gc>: Sized {
    /// Returns a unique type name the host registers this type under
    fn type_name() -> &'static str;

    /// Register methods for this type
    fn add_methods<M: UserDataMethods<'gc, Self>>(_: &mut M) {}

    /// Bytes held outside the host's managed heap
    fn memsize(&self) -> usize;
}

/// Trait for registering methods on a UserData type
pub trait UserDataMethods<'gc, T: UserData<'gc>> {
    /// Add a method that doesn't mutate the receiver
    fn add_method<F>(&mut self, name: &'static str, arity: u8, closure: F)
    where
        F: Fn(&Mutation<'gc>, &T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc;

    /// Add a method that can mutate the receiver
    fn add_method_mut<F>(&mut self, name: &'static str, arity: u8, closure: F)
    where
        F: Fn(&Mutation<'gc>, &mut T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc;

    /// Register a second public name for an existing method, the way a
    /// host defines operator aliases
    fn add_alias(&mut self, alias: &'static str, target: &'static str);
}

enum MethodCall<'gc, T> {
    Shared(Box<dyn Fn(&Mutation<'gc>, &T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc>),
    Mut(Box<dyn Fn(&Mutation<'gc>, &mut T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc>),
}

struct Method<'gc, T> {
    name: &'static str,
    arity: u8,
    call: MethodCall<'gc, T>,
}

/// Stores the registered methods for a UserData type T and routes calls
/// by public name. Arity and method-name checking happen here, before
/// the container is ever touched.
pub struct UserDataTypedMap<'gc, T: UserData<'gc>> {
    methods: HashMap<&'static str, Method<'gc, T>>,
    aliases: HashMap<&'static str, &'static str>,
}

impl<'gc, T: UserData<'gc>> UserDataTypedMap<'gc, T> {
    pub fn new() -> Self {
        let mut map = Self {
            methods: HashMap::new(),
            aliases: HashMap::new(),
        };
        T::add_methods(&mut map);
        map
    }

    /// Call a registered method on `this` by its public name or alias.
    ///
    /// Methods whose host-level result is the receiver itself (here
    /// `append`/`<<` and `prepend`/`>>`, which chain) return `Value::Nil`:
    /// the receiver's handle belongs to the host wrapper, not to this
    /// registry, so a `Nil` result from a mutating method means "hand the
    /// receiver back yourself".
    pub fn dispatch(
        &self,
        mc: &Mutation<'gc>,
        this: &mut T,
        name: &str,
        args: Vec<Value<'gc>>,
    ) -> InnerResult<'gc> {
        let name: &str = match self.aliases.get(name) {
            Some(target) => target,
            None => name,
        };
        let method = self
            .methods
            .get(name)
            .ok_or_else(|| ListError::UnknownMethod(name.to_string()))?;
        if args.len() != method.arity as usize {
            return Err(ListError::WrongArity(method.name, method.arity, args.len()));
        }
        match &method.call {
            MethodCall::Shared(f) => f(mc, this, args),
            MethodCall::Mut(f) => f(mc, this, args),
        }
    }
}

impl<'gc, T: UserData<'gc>> Default for UserDataTypedMap<'gc, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'gc, T: UserData<'gc>> UserDataMethods<'gc, T> for UserDataTypedMap<'gc, T> {
    fn add_method<F>(&mut self, name: &'static str, arity: u8, closure: F)
    where
        F: Fn(&Mutation<'gc>, &T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc,
    {
        self.methods.insert(
            name,
            Method {
                name,
                arity,
                call: MethodCall::Shared(Box::new(closure)),
            },
        );
    }

    fn add_method_mut<F>(&mut self, name: &'static str, arity: u8, closure: F)
    where
        F: Fn(&Mutation<'gc>, &mut T, Vec<Value<'gc>>) -> InnerResult<'gc> + 'gc,
    {
        self.methods.insert(
            name,
            Method {
                name,
                arity,
                call: MethodCall::Mut(Box::new(closure)),
            },
        );
    }

    fn add_alias(&mut self, alias: &'static str, target: &'static str) {
        self.aliases.insert(alias, target);
    }
}

impl<'gc> UserData<'gc> for LinkedList<'gc> {
    fn type_name() -> &'static str {
        Self::TYPE_NAME
    }

    fn add_methods<M: UserDataMethods<'gc, Self>>(methods: &mut M) {
        // append and prepend chain, so their host-level result is the
        // receiver handle, which only the host wrapper holds. Nil here
        // per the convention documented on dispatch.
        methods.add_method_mut("append", 1, |_mc, list, mut args| {
            list.append(args.remove(0));
            Ok(Value::Nil)
        });
        methods.add_alias("<<", "append");

        methods.add_method_mut("prepend", 1, |_mc, list, mut args| {
            list.prepend(args.remove(0));
            Ok(Value::Nil)
        });
        methods.add_alias(">>", "prepend");

        methods.add_method_mut("shift", 0, |_mc, list, _args| Ok(list.shift()));

        methods.add_method("inspect", 0, |mc, list, _args| {
            Ok(Value::String(Gc::new(mc, list.inspect())))
        });
    }

    fn memsize(&self) -> usize {
        LinkedList::memsize(self)
    }
}
