//! Attribute macro behind `#[dynamic_testhelpers::test]`.

use unsynn::*;

keyword! {
    KFn = "fn";
}

unsynn! {
    // `attrs` holds attributes, visibility and qualifiers ahead of `fn`;
    // `signature` holds generics, arguments and the return type.
    struct TestFn {
        attrs: Any<Cons<Except<KFn>, TokenTree>>,
        _fn: KFn,
        name: Ident,
        signature: Any<Cons<Except<BraceGroup>, TokenTree>>,
        body: BraceGroup,
    }
}

/// Marks a test that runs inside a `test` span named after the function.
///
/// The expansion calls `dynamic_testhelpers::enter_test`, which installs the
/// subscriber on first use, so tracing events from dynamic-value show up in
/// the test output tagged with the test name.
///
/// ```ignore
/// #[dynamic_testhelpers::test]
/// fn prints_compact_text() {
///     // events logged here carry `test{test_name="prints_compact_text"}`
/// }
/// ```
///
/// Another test attribute can be named as the argument, e.g.
/// `#[dynamic_testhelpers::test(tokio::test)]`.
#[proc_macro_attribute]
pub fn test(
    attr: proc_macro::TokenStream,
    item: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let item = TokenStream::from(item);
    let Ok(test_fn) = item.to_token_iter().parse::<TestFn>() else {
        return quote::quote! {
            ::core::compile_error!("#[dynamic_testhelpers::test] expects a function");
        }
        .into();
    };

    let attrs = test_fn.attrs.to_token_stream();
    let name = test_fn.name;
    let signature = test_fn.signature.to_token_stream();
    let body = test_fn.body.0.stream();

    let test_attr = if attr.is_empty() {
        quote::quote! { #[::core::prelude::rust_2024::test] }
    } else {
        let attr = TokenStream::from(attr);
        quote::quote! { #[#attr] }
    };

    quote::quote! {
        #test_attr
        #attrs fn #name #signature {
            let _test_span = ::dynamic_testhelpers::enter_test(::core::stringify!(#name));

            #body
        }
    }
    .into()
}
