mod compare;
mod vector;
