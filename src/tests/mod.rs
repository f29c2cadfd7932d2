mod authorize;
mod toasts;
mod view;
