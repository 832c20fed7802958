pub mod casement;
