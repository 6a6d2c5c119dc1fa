//! Subject fixtures for integration tests.
#![allow(dead_code)]

use std::cell::OnceCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

use mockwalk::{Field, Inspect, Shape};

use super::mock::Expectations;

/// Collaborator interface implemented by [`MockService`].
pub trait Service: Inspect {
    fn do_something(&self, arg: &str) -> Result<(), String>;
}

/// Mock collaborator embedding the expectation-bearing type, like a generated mock would.
#[derive(Debug, Default)]
pub struct MockService {
    pub mock: Expectations,
}

mockwalk::inspect_struct!(MockService {
    embedded mock as "Mock",
});

impl MockService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mock expecting `DoSomething(arg)` exactly once.
    pub fn expecting_once(arg: &str) -> Self {
        let service = Self::new();
        service.mock.on("DoSomething", &[arg]).once();
        service
    }
}

impl Service for MockService {
    fn do_something(&self, arg: &str) -> Result<(), String> {
        self.mock.called("DoSomething", &[arg]);
        Ok(())
    }
}

/// Real implementation with no mocks inside.
pub struct RealService {
    pub endpoint: String,
}

mockwalk::inspect_struct!(RealService {
    field endpoint as "Endpoint",
});

impl Service for RealService {
    fn do_something(&self, _arg: &str) -> Result<(), String> {
        Ok(())
    }
}

pub struct Handler {
    pub service: Box<MockService>,
}

mockwalk::inspect_struct!(Handler {
    field service as "Service",
});

impl Handler {
    pub fn new(service: MockService) -> Self {
        Self {
            service: Box::new(service),
        }
    }

    pub fn handle(&self, arg: &str) -> Result<(), String> {
        self.service.do_something(arg)
    }
}

pub struct Outer {
    pub inner: Handler,
    pub label: String,
}

mockwalk::inspect_struct!(Outer {
    field inner as "Inner",
    field label as "Label",
});

/// Collaborator held behind an interface field.
pub struct PolymorphicHandler {
    pub service: Box<dyn Service>,
}

mockwalk::inspect_struct!(PolymorphicHandler {
    interface service as "Service",
});

pub struct OptionalHandler {
    pub service: Option<Box<MockService>>,
    pub backup: Option<Arc<dyn Service>>,
}

mockwalk::inspect_struct!(OptionalHandler {
    field service as "Service",
    interface backup as "Backup",
});

pub struct EncapsulatedHandler {
    pub name: String,
    service: Box<MockService>,
}

mockwalk::inspect_struct!(EncapsulatedHandler {
    field name as "Name",
    private service,
});

impl EncapsulatedHandler {
    pub fn new(service: MockService) -> Self {
        Self {
            name: "encapsulated".into(),
            service: Box::new(service),
        }
    }
}

/// Embeds a whole handler anonymously.
pub struct ExtendedHandler {
    base: Handler,
    pub audit: MockService,
}

mockwalk::inspect_struct!(ExtendedHandler {
    embedded base as "Handler",
    field audit as "Audit",
});

impl ExtendedHandler {
    pub fn new(base: Handler, audit: MockService) -> Self {
        Self { base, audit }
    }
}

pub struct TwoServices {
    pub first: Box<MockService>,
    pub second: Box<MockService>,
}

mockwalk::inspect_struct!(TwoServices {
    field first as "First",
    field second as "Second",
});

/// Mocks hidden inside collections are out of reach.
pub struct Registry {
    pub services: Vec<MockService>,
    pub by_name: HashMap<String, MockService>,
    pub count: usize,
}

mockwalk::inspect_struct!(Registry {
    field services as "Services",
    field by_name as "ByName",
    field count as "Count",
});

/// Two fields sharing one mock through reference counting.
pub struct SharedServices {
    pub primary: Rc<MockService>,
    pub replica: Rc<MockService>,
}

mockwalk::inspect_struct!(SharedServices {
    field primary as "Primary",
    field replica as "Replica",
});

/// Linked node for cyclic graphs.
pub struct Node {
    pub name: &'static str,
    pub service: MockService,
    pub next: OnceCell<Rc<Node>>,
}

impl Inspect for Node {
    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    fn shape(&self) -> Shape<'_> {
        Shape::Struct(vec![
            Field::exported("Service", &self.service),
            Field::exported("Next", &self.next),
        ])
    }
}

impl Node {
    pub fn new(name: &'static str, service: MockService) -> Rc<Self> {
        Rc::new(Self {
            name,
            service,
            next: OnceCell::new(),
        })
    }

    pub fn link(&self, next: &Rc<Node>) {
        let _ = self.next.set(Rc::clone(next));
    }
}
