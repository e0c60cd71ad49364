//! Macros for verb declarations
//!
//! `twiml_verb!` declares the value type and builder of one element.
//! `twiml_children!` declares which children a parent builder accepts; its
//! input format is what `twiml-codegen` emits.

/// Declare a verb value type and its builder
macro_rules! twiml_verb {
    (
        $(#[$meta:meta])*
        $verb:ident => $builder:ident, $tag:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $verb {
            element: Element,
        }

        impl TwiML for $verb {
            fn element(&self) -> &Element {
                &self.element
            }
        }

        impl From<$verb> for Element {
            fn from(verb: $verb) -> Element {
                verb.element
            }
        }

        #[doc = concat!("Builder for [`", stringify!($verb), "`]")]
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $builder {
            element: Element,
        }

        #[allow(dead_code)]
        impl $builder {
            fn blank() -> Self {
                Self {
                    element: Element::new($tag),
                }
            }

            fn attr(&mut self, name: &str, value: impl ToString) -> &mut Self {
                self.element.set_attribute(name, value.to_string());
                self
            }

            pub(crate) fn push(&mut self, child: impl Into<Element>) -> &mut Self {
                self.element.push_child(child.into());
                self
            }
        }

        impl Build for $builder {
            type Target = $verb;

            fn build(&self) -> $verb {
                $verb {
                    element: self.element.clone(),
                }
            }
        }
    };
}

/// Declare the children a parent builder accepts
///
/// For each child this adds `add_<child>(Child)` plus one nested-block method
/// per constructor. The nested methods delegate to the free constructor
/// function of the same name, which must be in scope at the invocation site.
macro_rules! twiml_children {
    (
        $parent:ident {
            $(
                $adder:ident : $child:ident as $child_builder:ident {
                    $( $nested:ident ( $( $arg:ident : $argty:ty ),* ) ; )+
                }
            )*
        }
    ) => {
        impl $parent {
            $(
                #[doc = concat!("Append a finished `", stringify!($child), "`")]
                pub fn $adder(&mut self, child: $child) -> &mut Self {
                    self.push(child)
                }

                $(
                    #[doc = concat!("Configure a `", stringify!($child), "` in a block and append it")]
                    pub fn $nested(
                        &mut self,
                        $( $arg: $argty, )*
                        configure: impl FnOnce(&mut $child_builder),
                    ) -> &mut Self {
                        self.push($nested($( $arg, )* configure))
                    }
                )+
            )*
        }
    };
}
