use core::fmt::Write;

use heapless::String;

use crate::{config::PanelMode, http::Error, routes::routes};

/// Capacity of the rendered HTML body.
pub const PAGE_BUFFER_SIZE: usize = 2048;

pub type Page = String<PAGE_BUFFER_SIZE>;

const HEAD: &str = "<!DOCTYPE html>\n\
<html>\n\
<head>\n\
<meta charset=\"utf-8\">\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
<title>Control Panel</title>\n\
<style>\n\
body { background-color: rgb(251, 187, 195); font-family: Arial, sans-serif; text-align: center; margin-top: 50px; }\n\
h1 { font-size: 64px; margin-bottom: 30px; }\n\
button { background-color: LightGray; font-size: 36px; margin: 10px; padding: 20px 40px; border-radius: 10px; }\n\
.temperature { font-size: 48px; margin-top: 30px; color: #333; }\n\
</style>\n\
</head>\n\
<body>\n\
<h1>Control Panel</h1>\n";

const TAIL: &str = "</body>\n</html>\n";

/// Render the control page: one form per command of `mode` and the
/// temperature with two decimals.
pub fn render_page(mode: PanelMode, celsius: f32) -> Result<Page, Error> {
    let mut page = Page::new();
    page.push_str(HEAD).map_err(|()| Error::ResponseTooLarge)?;
    for route in routes(mode) {
        writeln!(
            page,
            "<form action=\".{}\"><button>{}</button></form>",
            route.path, route.label
        )?;
    }
    writeln!(
        page,
        "<p class=\"temperature\">Temperature: {:.2} &deg;C</p>",
        celsius
    )?;
    page.push_str(TAIL).map_err(|()| Error::ResponseTooLarge)?;
    Ok(page)
}
