#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Alias targets

/// Passes the provided tokens through unchanged.
///
/// This is what an alias created by [`define_alias!`] resolves to when its
/// predicate holds. With no input it evaluates to `true`, and with the
/// `if { .. } else { .. }` form it keeps the first branch.
///
/// ```
/// let value = t0_cfg::enabled! { if { 1 } else { 2 } };
/// assert_eq!(value, 1);
/// assert!(t0_cfg::enabled!());
/// ```
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($p)* };
    ($($p:tt)*) => { $($p)* };
}

/// Drops the provided tokens.
///
/// This is what an alias created by [`define_alias!`] resolves to when its
/// predicate does not hold. With no input it evaluates to `false`, and with the
/// `if { .. } else { .. }` form it keeps the second branch.
///
/// ```
/// let value = t0_cfg::disabled! { if { 1 } else { 2 } };
/// assert_eq!(value, 2);
/// assert!(!t0_cfg::disabled!());
/// ```
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($p:tt)* } else { $($n:tt)* }) => { $($n)* };
    ($($p:tt)*) => {};
}

// -----------------------------------------------------------------------------
// Selection

/// Selects the first arm whose condition holds.
///
/// A condition is either an alias macro path (`cfg::debug`) or a raw
/// `#[cfg(...)]` predicate. `_` matches unconditionally and must come last.
///
/// ```
/// t0_cfg::switch! {
///     #[cfg(any())] => {
///         const PICKED: &str = "never";
///     }
///     t0_cfg::enabled => {
///         const PICKED: &str = "alias";
///     }
///     _ => {
///         const PICKED: &str = "fallback";
///     }
/// }
///
/// assert_eq!(PICKED, "alias");
/// ```
#[macro_export]
macro_rules! switch {
    ({ $($tt:tt)* }) => {{
        $crate::switch! { $($tt)* }
    }};
    (_ => { $($output:tt)* }) => {
        $($output)*
    };
    (
        #[cfg($cfg:meta)] => $output:tt
        $($( $rest:tt )+)?
    ) => {
        #[cfg($cfg)]
        $crate::switch! { _ => $output }
        $(
            #[cfg(not($cfg))]
            $crate::switch! { $($rest)+ }
        )?
    };
    (
        $cond:path => $output:tt
        $($( $rest:tt )+)?
    ) => {
        $cond! {
            if {
                $crate::switch! { _ => $output }
            } else {
                $(
                    $crate::switch! { $($rest)+ }
                )?
            }
        }
    };
}

// -----------------------------------------------------------------------------
// Alias definition

/// Defines one alias macro per `#[cfg(...)]` predicate.
///
/// Each alias is re-exported as either [`enabled!`] or [`disabled!`], decided
/// once at build time.
///
/// ```
/// mod cfg {
///     t0_cfg::define_alias! {
///         #[cfg(all())] => always,
///         #[cfg(any())] => never,
///     }
/// }
///
/// let mut hits = 0;
/// cfg::always! { hits += 1; }
/// cfg::never! { hits += 10; }
/// assert_eq!(hits, 1);
///
/// assert!(cfg::always!());
/// assert!(!cfg::never!());
/// ```
#[macro_export]
macro_rules! define_alias {
    () => {};
    (
        #[cfg($meta:meta)] => $p:ident
        $(, $( $rest:tt )*)?
    ) => {
        $crate::switch! {
            #[cfg($meta)] => {
                #[doc = concat!(
                    "Passes the provided code because `#[cfg(",
                    stringify!($meta),
                    ")]` is currently active."
                )]
                pub use $crate::enabled as $p;
            }
            _ => {
                #[doc = concat!(
                    "Suppresses the provided code because `#[cfg(",
                    stringify!($meta),
                    ")]` is not currently active."
                )]
                pub use $crate::disabled as $p;
            }
        }
        $(
            $crate::define_alias! { $($rest)* }
        )?
    };
}
