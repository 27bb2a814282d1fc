mod contact_form;
mod site_image;

pub use contact_form::ContactForm;
pub use site_image::{resolve_image_src, SiteImage};
