pub mod labeling;
pub mod naive_bayes;
pub mod normalization;
pub mod pipeline;
pub mod tfidf;
pub mod tokenization;
