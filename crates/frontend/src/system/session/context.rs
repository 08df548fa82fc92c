use leptos::prelude::*;

use super::Session;

/// Session context provider component
///
/// Restores the session from the browser once, unless an explicit
/// session is passed in.
#[component]
pub fn SessionProvider(
    #[prop(optional)] session: Option<Session>,
    children: ChildrenFn,
) -> impl IntoView {
    let session = session.unwrap_or_else(Session::restore);
    if !session.is_authenticated() {
        log::warn!("No access token found; backend calls will be rejected");
    }

    provide_context(RwSignal::new(session));

    children()
}

/// Hook to access the session
pub fn use_session() -> RwSignal<Session> {
    use_context::<RwSignal<Session>>().expect("SessionProvider not found in component tree")
}
