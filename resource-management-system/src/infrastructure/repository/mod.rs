mod resource;
mod tag;
