//! Fixture builders shared by the unit tests.

use crate::model::{
    Deprecation, Member, MemberKind, Model, Module, Package, Preview, Status, TypeElement,
    TypeKind, Visibility,
};

pub fn model(packages: Vec<Package>, types: Vec<TypeElement>) -> Model {
    Model {
        format_version: "1.0.0".to_string(),
        modules: Vec::new(),
        packages,
        types,
        tags: Vec::new(),
    }
}

pub fn module(name: &str) -> Module {
    Module {
        name: name.to_string(),
        summary: None,
        status: Status::default(),
    }
}

pub fn package(name: &str) -> Package {
    Package {
        name: name.to_string(),
        module: None,
        summary: None,
        status: Status::default(),
        included: true,
    }
}

pub fn type_of(kind: TypeKind, package: &str, name: &str) -> TypeElement {
    TypeElement {
        name: name.to_string(),
        package: package.to_string(),
        kind,
        type_params: Vec::new(),
        superclass: None,
        ancestors: Vec::new(),
        interfaces: Vec::new(),
        visibility: Visibility::Public,
        summary: None,
        status: Status::default(),
        members: Vec::new(),
    }
}

pub fn class(package: &str, name: &str) -> TypeElement {
    type_of(TypeKind::Class, package, name)
}

pub fn interface(package: &str, name: &str) -> TypeElement {
    type_of(TypeKind::Interface, package, name)
}

pub fn subclass(package: &str, name: &str, superclass: &str) -> TypeElement {
    TypeElement {
        superclass: Some(superclass.to_string()),
        ..class(package, name)
    }
}

pub fn method(name: &str, signature: &str) -> Member {
    Member {
        name: name.to_string(),
        kind: MemberKind::Method,
        signature: Some(signature.to_string()),
        summary: None,
        status: Status::default(),
    }
}

pub fn field(name: &str) -> Member {
    Member {
        name: name.to_string(),
        kind: MemberKind::Field,
        signature: None,
        summary: None,
        status: Status::default(),
    }
}

pub fn deprecated(since: Option<&str>) -> Status {
    Status {
        deprecated: Some(Deprecation {
            for_removal: false,
            since: since.map(str::to_string),
            comment: Some("Use something else. It was a mistake.".to_string()),
        }),
        ..Status::default()
    }
}

pub fn preview(feature: &str) -> Status {
    Status {
        preview: Some(Preview {
            feature: feature.to_string(),
            jep: None,
        }),
        ..Status::default()
    }
}
