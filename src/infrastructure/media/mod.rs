pub mod cloudinary;

pub use cloudinary::CloudinaryMediaStore;
