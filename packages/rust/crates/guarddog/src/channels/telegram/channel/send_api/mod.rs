mod request;
mod response;
mod webhook;
