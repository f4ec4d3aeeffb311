use explorer_core::RenderError;

use crate::host;

const STYLE: &str = include_str!("../styles/style.css");

pub fn inject_css() -> Result<(), RenderError> {
    let document = host::document()?;
    let head = host::head()?;

    let style = document
        .create_element("style")
        .map_err(|err| RenderError::Dom(format!("{err:?}")))?;
    style.set_text_content(Some(STYLE));

    head.append_child(&style)
        .map_err(|err| RenderError::Dom(format!("{err:?}")))?;

    Ok(())
}
