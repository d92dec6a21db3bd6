//! Fluent builders for declarations and their members.
//!
//! Member builders carry their enclosing builder as a type parameter.
//! A member builder obtained from [`DeclarationBuilder`] can only be
//! `finish()`ed, which moves the member into the declaration and hands the
//! declaration builder back. One created standalone (`P = Detached`) can only
//! produce a detached model object through `build()`.

/// Modifier setters shared by every builder holding an `element` field.
macro_rules! element_modifiers {
    () => {
        /// Set the visibility.
        pub fn visibility(mut self, visibility: $crate::Visibility) -> Self {
            self.element.visibility = visibility;
            self
        }

        pub fn public(self) -> Self {
            self.visibility($crate::Visibility::Public)
        }

        pub fn protected(self) -> Self {
            self.visibility($crate::Visibility::Protected)
        }

        pub fn private(self) -> Self {
            self.visibility($crate::Visibility::Private)
        }

        pub fn package_private(self) -> Self {
            self.visibility($crate::Visibility::PackagePrivate)
        }

        /// Mark the element `static`.
        pub fn static_(self) -> Self {
            self.set_static(true)
        }

        /// Mark the element `final`.
        pub fn final_(self) -> Self {
            self.set_final(true)
        }

        pub fn set_static(mut self, value: bool) -> Self {
            self.element.is_static = value;
            self
        }

        pub fn set_final(mut self, value: bool) -> Self {
            self.element.is_final = value;
            self
        }

        /// Apply an annotation. Annotations render in the order applied.
        pub fn annotation(mut self, annotation: impl Into<$crate::Annotation>) -> Self {
            self.element.annotations.push(annotation.into());
            self
        }

        /// Declare a type parameter.
        pub fn generic(mut self, generic: $crate::GenericType) -> Self {
            self.element.generics.push(generic);
            self
        }
    };
}

mod declaration;
mod field;
mod method;

pub use declaration::DeclarationBuilder;
pub use field::FieldBuilder;
pub use method::{ConstructorBuilder, MethodBuilder};

/// Parent marker for a member builder with no enclosing declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Detached;
