use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, spanned::Spanned, FnArg, GenericArgument, ItemFn, Pat, PathArguments,
    Signature, Type,
};

/// Transform an asynchronous test into a synchronous one and inject
/// dependencies. Every test runs against its own fresh election.
///
/// Injectable dependencies are [`rocket::local::asynchronous::Client`] and
/// `std::sync::Arc<crate::service::RecordingNotifier>`, the notifier the
/// election under test delivers to.
#[proc_macro_attribute]
pub fn backend_test(_args: TokenStream, input: TokenStream) -> TokenStream {
    let mut item_fn = parse_macro_input!(input as ItemFn);

    // Extract type information and reject invalid function signatures.
    let test_args = match check_sig(item_fn.sig.clone()) {
        Ok(args) => args,
        Err(err) => {
            return err.into_compile_error().into();
        }
    };

    // Rename the future so the test can have its original name.
    let name = item_fn.sig.ident.clone();
    let new_name = format_ident!("{}_fut", name);
    item_fn.sig.ident = new_name.clone();

    // Rewrite the test function.
    quote! {
        #[test]
        fn #name() {
            /// Test setup.
            async fn setup(
                notifier: std::sync::Arc<crate::service::RecordingNotifier>,
            ) -> rocket::local::asynchronous::Client {
                rocket::local::asynchronous::Client::untracked(crate::rocket_for_notifier(notifier))
                    .await
                    .unwrap()
            }

            /// The test itself.
            #item_fn

            let runtime = rocket::tokio::runtime::Builder::new_multi_thread()
                .thread_name("rocket-worker-test-thread")
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();

            let notifier = std::sync::Arc::new(crate::service::RecordingNotifier::default());
            let rocket_client = runtime.block_on(setup(notifier.clone()));

            runtime.block_on(#new_name(#(#test_args),*));
        }
    }
    .into()
}

/// Ensure the wrapped test is async, extract parameters to inject, and reject unknown parameters.
fn check_sig(sig: Signature) -> Result<Vec<TokenStream2>, syn::Error> {
    if sig.asyncness.is_none() {
        return Err(syn::Error::new(sig.span(), "Test must be marked `async`"));
    }

    let mut has_client = false;
    let mut has_notifier = false;
    let mut args = vec![];

    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            if let (Pat::Ident(_), Type::Path(type_path)) = (&*pat_type.pat, &*pat_type.ty) {
                if let Some(type_ident) = type_path.path.get_ident() {
                    if type_ident == "Client" {
                        if has_client {
                            return Err(syn::Error::new(
                                input.span(),
                                "Test cannot accept more than one `rocket::local::asynchronous::Client`",
                            ));
                        }
                        has_client = true;
                        args.push(quote! { rocket_client });
                        continue;
                    }
                } else if is_arc_of_notifier(type_path) {
                    if has_notifier {
                        return Err(syn::Error::new(
                            input.span(),
                            "Test cannot accept more than one `Arc<RecordingNotifier>`",
                        ));
                    }
                    has_notifier = true;
                    args.push(quote! { notifier.clone() });
                    continue;
                }
            }
        }

        return Err(syn::Error::new(
            input.span(),
            "Expected one of `client_ident: Client` or `notifier_ident: Arc<RecordingNotifier>`",
        ));
    }

    Ok(args)
}

/// Whether the type is `Arc<RecordingNotifier>`, with any path prefix on either.
fn is_arc_of_notifier(type_path: &syn::TypePath) -> bool {
    // Valid as the last path segment for any type is itself
    let Some(outer) = type_path.path.segments.last() else {
        return false;
    };
    if outer.ident != "Arc" {
        return false;
    }
    let PathArguments::AngleBracketed(generics) = &outer.arguments else {
        return false;
    };
    match generics.args.first() {
        Some(GenericArgument::Type(Type::Path(inner))) => inner
            .path
            .segments
            .last()
            .map_or(false, |segment| segment.ident == "RecordingNotifier"),
        _ => false,
    }
}
