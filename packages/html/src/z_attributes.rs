use zhtml_core::ElementBuilder;

use crate::choices::ZReqMethod;

/// The `z-*` attributes read by the client-side interactivity runtime.
///
/// Every element builder gets these through the blanket impl below, so a request can be
/// attached to any tag:
///
/// ```rust
/// use zhtml::prelude::*;
///
/// let button = html::button()
///     .z_req("/items")
///     .z_req_method(ZReqMethod::Post)
///     .z_target("#list")
///     .z_swap("beforeend")
///     .escaped("Add");
///
/// assert_eq!(
///     zhtml_ssr::render(button),
///     r##"<button z-req="/items" z-req-method="post" z-target="#list" z-swap="beforeend">Add</button>"##
/// );
/// ```
#[rustfmt::skip]
pub trait ZAttributes: ElementBuilder {
    attributes!([
        /// URL the element requests.
        z_req: Str = "z-req";
        /// Selector of the element that receives the response.
        z_target: Str = "z-target";
        /// Selector applied to the response before it is swapped in.
        z_req_selector: Str = "z-req-selector";
        /// How the response replaces the target, for example `outerHTML` or `beforeend`.
        z_swap: Str = "z-swap";
        /// Push the request URL onto the browser history after swapping.
        z_swap_push: Bool = "z-swap-push";
        /// Event that fires the request.
        z_trigger: Str = "z-trigger";
        z_req_method: Choice(ZReqMethod) = "z-req-method";
        z_req_strategy: Str = "z-req-strategy";
        z_req_history: Str = "z-req-history";
        /// Values merged into the request body.
        z_data: Str = "z-data";
        /// Request body as a JSON document.
        z_json: Str = "z-json";
        z_req_batch: Bool = "z-req-batch";
        z_action: Str = "z-action";
        /// Script run before the request is sent.
        z_req_before: Str = "z-req-before";
        /// Script run after the response is swapped in.
        z_req_after: Str = "z-req-after";
    ]);
}

impl<T: ElementBuilder> ZAttributes for T {}
