mod merge_divergent_branches;
