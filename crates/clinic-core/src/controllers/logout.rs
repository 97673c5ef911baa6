use crate::context::Context;
use crate::dom::Control;
use crate::router::Page;

/// Clear the session and return to the login page when `#logout` is clicked
pub fn bind_logout(ctx: &Context) {
    let handler_ctx = ctx.clone();
    ctx.document.on_click(
        Control::Logout,
        Box::new(move || {
            handler_ctx.session.clear_all();
            log::info!("session cleared");
            handler_ctx.document.navigate(Page::Login);
        }),
    );
}
