mod controls;
mod propagation;
mod series_table;
