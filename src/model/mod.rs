pub mod seir_ahd;
