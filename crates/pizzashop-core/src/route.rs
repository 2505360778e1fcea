//! Declarative route table.
//!
//! The table is an ordered, immutable list of [`RouteDef`]s built once at
//! startup and handed to the router. Resolution is first-match-wins.

use std::collections::HashSet;

use crate::error::RouteError;
use crate::pattern::{Params, PathPattern, path_of};

/// Pages of the storefront.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Home,
    Login,
    Register,
    CreatePizza,
    /// Edit page for a single pizza, keyed by the `pizzaName` parameter.
    UpdatePizza,
    ShoppingCart,
    CheckOut,
}

impl View {
    /// Human readable page title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::CreatePizza => "Create Pizza",
            Self::UpdatePizza => "Update Pizza",
            Self::ShoppingCart => "Shopping Cart",
            Self::CheckOut => "Check Out",
        }
    }
}

/// A single entry of the route table, as declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: String,
    pub view: View,
    pub name: Option<String>,
}

impl RouteDef {
    pub fn new(path: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            view,
            name: None,
        }
    }

    /// Attach a symbolic name, used for URL building.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Result of resolving a path: the view to render and its inputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewBinding {
    pub view: View,
    pub params: Params,
    /// Symbolic name of the matched route, if it has one.
    pub name: Option<String>,
}

impl ViewBinding {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }
}

#[derive(Clone, Debug)]
struct Route {
    def: RouteDef,
    pattern: PathPattern,
}

/// Compiled, immutable route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Compile and validate a list of route definitions.
    ///
    /// Fails on malformed patterns and on duplicate route names.
    pub fn new(defs: Vec<RouteDef>) -> Result<Self, RouteError> {
        let mut names = HashSet::new();
        let mut routes = Vec::with_capacity(defs.len());

        for def in defs {
            if let Some(name) = &def.name
                && !names.insert(name.clone())
            {
                return Err(RouteError::DuplicateName(name.clone()));
            }
            let pattern = PathPattern::parse(&def.path)?;
            routes.push(Route { def, pattern });
        }

        Ok(Self { routes })
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Declared routes, in table order.
    pub fn defs(&self) -> impl Iterator<Item = &RouteDef> {
        self.routes.iter().map(|r| &r.def)
    }

    /// Resolve a URL to the first matching route.
    ///
    /// Query string and fragment are ignored.
    pub fn resolve(&self, url: &str) -> Result<ViewBinding, RouteError> {
        let path = path_of(url);
        self.routes
            .iter()
            .find_map(|route| {
                route.pattern.matches(path).map(|params| ViewBinding {
                    view: route.def.view,
                    params,
                    name: route.def.name.clone(),
                })
            })
            .ok_or_else(|| RouteError::NotFound(path.to_string()))
    }

    /// Build the path of a named route.
    pub fn path_for(&self, name: &str, params: &Params) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.def.name.as_deref() == Some(name))
            .ok_or_else(|| RouteError::UnknownName(name.to_string()))?;
        route.pattern.build(params)
    }

    /// Build the path of the first route bound to `view`.
    pub fn path_for_view(&self, view: View, params: &Params) -> Result<String, RouteError> {
        let route = self
            .routes
            .iter()
            .find(|r| r.def.view == view)
            .ok_or(RouteError::UnboundView(view))?;
        route.pattern.build(params)
    }
}
