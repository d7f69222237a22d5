mod cors;
mod send;
mod thank_you;
