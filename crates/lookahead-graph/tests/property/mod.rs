mod graph_properties;
